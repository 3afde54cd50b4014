use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::Arc as StdArc;

use approx::assert_abs_diff_eq;
use test_log::test;

use crate::prelude::*;

const EPS: f64 = 1e-9;

/// One end point per quadrant, all with |dx| = 10 and |dy| = 8.
fn quadrant_ends() -> [Point; 4] {
    [
        Point::new(10.0, 8.0),
        Point::new(-10.0, 8.0),
        Point::new(-10.0, -8.0),
        Point::new(10.0, -8.0),
    ]
}

fn senses() -> [Sense; 2] {
    [Sense::Clockwise, Sense::Anticlockwise]
}

fn cad_spec() -> CadSpec {
    CadSpec::new(Span::new(0.0, 0.22), "SiO2 (Glass) - Palik")
}

#[test]
fn connector_constructs_in_all_quadrants_for_both_senses() {
    let start = Point::new(0.0, 0.0);
    for sense in senses() {
        for end in quadrant_ends() {
            let conn = QuarterBend::new(sense, start, end, 0.5, 3.0)
                .unwrap_or_else(|e| panic!("construction failed for {end:?}: {e}"));
            assert_eq!(conn.start_point(), start);
            assert_eq!(conn.end_point(), end);
        }
    }
}

#[test]
fn sub_segments_are_tangent_in_all_quadrants() {
    let start = Point::new(1.5, -2.25);
    for sense in senses() {
        for delta in quadrant_ends() {
            let end = start + delta;
            let conn = QuarterBend::new(sense, start, end, 0.5, 3.0).unwrap();
            let (first, bend, second) =
                (conn.first_segment(), conn.bend(), conn.second_segment());

            assert_eq!(first.start_point(), start);
            assert_eq!(second.end_point(), end);
            assert_abs_diff_eq!(first.end_point(), bend.start_point(), epsilon = EPS);
            assert_abs_diff_eq!(second.start_point(), bend.end_point(), epsilon = EPS);

            // Both straight runs are axis-parallel.
            let e1 = first.end_point();
            assert!(e1.x == start.x || e1.y == start.y);
            let e2 = second.start_point();
            assert!(e2.x == end.x || e2.y == end.y);

            // The bend center is one radius away from both tangent points.
            assert_abs_diff_eq!(bend.center().dist(e1), 3.0, epsilon = EPS);
            assert_abs_diff_eq!(bend.center().dist(e2), 3.0, epsilon = EPS);
        }
    }
}

#[test]
fn sweep_is_a_quarter_turn_with_the_variant_sense() {
    let start = Point::new(0.0, 0.0);
    for sense in senses() {
        for end in quadrant_ends() {
            let conn = QuarterBend::new(sense, start, end, 0.5, 3.0).unwrap();
            let sweep = conn.bend().arc().sweep();
            assert_abs_diff_eq!(sweep.abs(), FRAC_PI_2, epsilon = EPS);
            assert_eq!(sweep.signum(), sense.angular_sign());
            assert_eq!(conn.bend().arc().is_ccw(), sense == Sense::Anticlockwise);
        }
    }
}

#[test]
fn clearance_is_checked_against_both_deltas() {
    let start = Point::new(0.0, 0.0);
    for sense in senses() {
        for end in quadrant_ends() {
            // min(|dx|, |dy|) = 8: equality still fits.
            assert!(QuarterBend::new(sense, start, end, 0.5, 8.0).is_ok());
            let err = QuarterBend::new(sense, start, end, 0.5, 8.5).unwrap_err();
            assert!(matches!(err, Error::InsufficientClearance { .. }));
        }
    }
}

#[test]
fn anticlockwise_short_route_is_rejected() {
    // radius 5 exceeds both deltas (2).
    let err = QuarterBend::anticlockwise(
        Point::new(0.0, 0.0),
        Point::new(2.0, -2.0),
        0.5,
        QuarterBend::DEFAULT_RADIUS,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::InsufficientClearance { radius, .. } if radius == 5.0
    ));
    let msg = err.to_string();
    assert!(msg.contains("insufficient clearance"), "got: {msg}");
}

#[test]
fn axis_aligned_endpoints_are_rejected() {
    let start = Point::new(3.0, 4.0);
    for sense in senses() {
        for end in [
            Point::new(20.0, 4.0),
            Point::new(3.0, 20.0),
            Point::new(3.0, 4.0),
        ] {
            let err = QuarterBend::new(sense, start, end, 0.5, 3.0).unwrap_err();
            assert_eq!(err, Error::AxisAlignedRoute);
        }
    }
}

#[test]
fn clockwise_right_down_matches_reference_geometry() {
    let conn = QuarterBend::clockwise(
        Point::new(0.0, 0.0),
        Point::new(10.0, -10.0),
        0.5,
        3.0,
    )
    .unwrap();

    let first = conn.first_segment();
    assert_eq!(first.start_point(), Point::new(0.0, 0.0));
    assert_eq!(first.end_point(), Point::new(7.0, 0.0));

    let arc = conn.bend().arc();
    assert_eq!(arc.center(), Point::new(7.0, -3.0));
    assert_abs_diff_eq!(arc.start_angle(), FRAC_PI_2, epsilon = EPS);
    assert_abs_diff_eq!(arc.end_angle(), 0.0, epsilon = EPS);
    assert_abs_diff_eq!(arc.radius(), 3.0, epsilon = EPS);

    let second = conn.second_segment();
    assert_eq!(second.start_point(), Point::new(10.0, -3.0));
    assert_eq!(second.end_point(), Point::new(10.0, -10.0));
}

#[test]
fn anticlockwise_left_up_matches_reference_geometry() {
    // start above and to the right of end.
    let conn = QuarterBend::anticlockwise(
        Point::new(10.0, 10.0),
        Point::new(0.0, 0.0),
        0.5,
        3.0,
    )
    .unwrap();

    let first = conn.first_segment();
    assert_eq!(first.end_point(), Point::new(3.0, 10.0));
    let arc = conn.bend().arc();
    assert_eq!(arc.center(), Point::new(3.0, 7.0));
    assert_abs_diff_eq!(arc.start_angle(), FRAC_PI_2, epsilon = EPS);
    assert_abs_diff_eq!(arc.end_angle(), PI, epsilon = EPS);
    assert_eq!(conn.second_segment().start_point(), Point::new(0.0, 7.0));
}

#[test]
fn draw_emits_path_arc_path_in_order() {
    let start = Point::new(0.0, 0.0);
    let end = Point::new(10.0, -10.0);
    let conn = QuarterBend::clockwise(start, end, 0.5, 3.0).unwrap();

    let mut cell = Cell::new("top");
    let layer = Layer(3, 1);
    let (s, e) = conn.draw(&mut cell, layer);
    assert_eq!((s, e), (start, end));

    let elements: Vec<_> = cell.elements().collect();
    assert_eq!(elements.len(), 3);
    for element in &elements {
        assert_eq!(element.layer(), layer);
    }
    let first = elements[0].shape().path().expect("expected a path");
    assert_eq!(first.width(), 0.5);
    assert_eq!(first.start(), Some(start));
    let arc = elements[1].shape().arc().expect("expected an arc");
    assert_eq!(arc.center(), Point::new(7.0, -3.0));
    let second = elements[2].shape().path().expect("expected a path");
    assert_eq!(second.end(), Some(end));

    // Accessors are unchanged by drawing.
    assert_eq!(conn.start_point(), start);
    assert_eq!(conn.end_point(), end);
}

#[test]
fn connectors_chain_endpoint_to_endpoint() {
    let mut cell = Cell::new("top");
    let a = QuarterBend::clockwise(Point::new(0.0, 0.0), Point::new(10.0, -10.0), 0.5, 3.0)
        .unwrap();
    let (_, mid) = a.draw(&mut cell, Layer(1, 0));
    let b = QuarterBend::anticlockwise(mid, mid + Point::new(15.0, -5.0), 0.5, 3.0).unwrap();
    let (start, _) = b.draw(&mut cell, Layer(1, 0));
    assert_eq!(start, mid);
    assert_eq!(cell.element_count(), 6);
}

#[test]
fn cad_export_emits_three_solids_on_supported_engines() {
    for kind in [EngineKind::Fdtd, EngineKind::Mode] {
        let conn = QuarterBend::with_cad(
            Sense::Clockwise,
            Point::new(0.0, 0.0),
            Point::new(10.0, -10.0),
            0.5,
            3.0,
            cad_spec(),
        )
        .unwrap();

        let mut session = SolidRecorder::new(kind);
        conn.draw_on_cad(&mut session).unwrap();

        let solids = session.solids();
        assert_eq!(solids.len(), 3);
        for solid in solids {
            assert_eq!(solid.z(), Span::new(0.0, 0.22));
            assert_eq!(
                solid.material(),
                &Material::Named("SiO2 (Glass) - Palik".into())
            );
        }
        // Axis-aligned straight runs extrude as rectangles; the bend as an
        // arc footprint.
        assert!(matches!(solids[0].footprint(), Shape::Rect(_)));
        assert!(matches!(solids[1].footprint(), Shape::Arc(_)));
        assert!(matches!(solids[2].footprint(), Shape::Rect(_)));
    }
}

#[test]
fn cad_export_without_spec_fails_and_emits_nothing() {
    let conn =
        QuarterBend::clockwise(Point::new(0.0, 0.0), Point::new(10.0, -10.0), 0.5, 3.0).unwrap();
    let mut session = SolidRecorder::new(EngineKind::Fdtd);
    let err = conn.draw_on_cad(&mut session).unwrap_err();
    assert_eq!(err, Error::MissingCadSpec);
    assert!(session.is_empty());
}

#[test]
fn cad_export_on_unsupported_engine_fails_and_emits_nothing() {
    let conn = QuarterBend::with_cad(
        Sense::Anticlockwise,
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        0.5,
        3.0,
        CadSpec::new(Span::new(-0.11, 0.11), 1.444),
    )
    .unwrap();

    for kind in [EngineKind::Device, EngineKind::Interconnect] {
        let mut session = SolidRecorder::new(kind);
        let err = conn.draw_on_cad(&mut session).unwrap_err();
        assert_eq!(err, Error::UnsupportedEngine(kind));
        assert!(session.is_empty());
    }
}

#[test]
fn cad_engine_check_precedes_spec_check() {
    // Matches the reference behavior: the engine type is validated before
    // the 3-D specification.
    let conn =
        QuarterBend::clockwise(Point::new(0.0, 0.0), Point::new(10.0, -10.0), 0.5, 3.0).unwrap();
    let mut session = SolidRecorder::new(EngineKind::Device);
    let err = conn.draw_on_cad(&mut session).unwrap_err();
    assert_eq!(err, Error::UnsupportedEngine(EngineKind::Device));
}

#[test]
fn waveguide_footprint_shapes() {
    let horiz = Waveguide::new(Point::new(0.0, 0.0), Point::new(5.0, 0.0), 1.0);
    assert_eq!(
        horiz.footprint().rect(),
        Some(Rect::from_sides(0.0, -0.5, 5.0, 0.5))
    );
    let diag = Waveguide::new(Point::new(0.0, 0.0), Point::new(5.0, 5.0), 1.0);
    assert!(matches!(diag.footprint(), Shape::Path(_)));
}

#[test]
fn grating_template_contains_outline_and_slots() {
    let params = AemdGratingParams::default();
    let grating = AemdGrating::new(params.clone());
    let cell = grating.cell();

    assert_eq!(cell.element_count(), 1 + params.count);

    let elements: Vec<_> = cell.elements().collect();
    let outline = elements[0];
    assert_eq!(outline.layer(), params.waveguide_layer);
    let polygon = outline.shape().polygon().expect("expected a polygon");
    assert_eq!(polygon.points().len(), 17);
    // The port vertices scale with the port width.
    assert_eq!(polygon.points()[7], Point::new(0.0, -params.port_width / 2.0));
    assert_eq!(polygon.points()[8], Point::new(0.0, params.port_width / 2.0));

    for (i, slot) in elements[1..].iter().enumerate() {
        assert_eq!(slot.layer(), params.etch_layer);
        let path = slot.shape().path().expect("expected a path");
        assert_eq!(path.width(), 18.0);
        let center = Point::new(
            (path.start().unwrap().x + path.end().unwrap().x) / 2.0,
            path.start().unwrap().y,
        );
        let expected = Point::new(246.061 + params.period * i as f64, 0.207);
        assert_abs_diff_eq!(center, expected, epsilon = EPS);
        assert_abs_diff_eq!(
            path.end().unwrap().x - path.start().unwrap().x,
            params.period * params.duty,
            epsilon = EPS
        );
    }
}

#[test]
fn grating_placements_share_the_template_cell() {
    let grating = AemdGrating::new(AemdGratingParams::default());
    let mut top = Cell::new("top");

    let origin = Point::new(100.0, -50.0);
    let placed = grating.place(origin, FRAC_PI_2);
    assert_eq!(placed.draw(&mut top), origin);
    grating.place(Point::new(400.0, -50.0), -FRAC_PI_2).draw(&mut top);

    assert_eq!(top.instance_count(), 2);
    let first = top.instance_named("AEMD_GRATING_0");
    assert_eq!(first.transformation().offset(), origin);
    assert_eq!(first.transformation().rotation(), FRAC_PI_2);

    let instances: Vec<_> = top.instances().collect();
    assert!(StdArc::ptr_eq(instances[0].child(), instances[1].child()));
    assert!(StdArc::ptr_eq(instances[0].child(), grating.cell()));
}

#[test]
fn cell_bbox_covers_elements_only() {
    let mut cell = Cell::new("top");
    assert_eq!(cell.bbox(), None);
    cell.add_element(Element::new(Layer(1, 0), Rect::from_sides(0.0, 0.0, 2.0, 1.0)));
    cell.add_element(Element::new(Layer(1, 0), Rect::from_sides(-1.0, 0.5, 0.5, 3.0)));
    let bbox = cell.bbox().unwrap();
    assert_eq!(bbox, Rect::from_sides(-1.0, 0.0, 2.0, 3.0));
}
