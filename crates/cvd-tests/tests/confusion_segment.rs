//! Confusion segment computation through the intersection service

use cvd_tests::SlabIntersection;
use oxcvd_core::{Deficiency, LmsModel, confusion_axis, confusion_segment};

#[test]
fn segment_exists_for_in_gamut_colors() {
    let model = LmsModel::smith_pokorny_75().unwrap();
    let mid_grey = model.lms_from_linear_rgb().multiply_vec([0.5, 0.5, 0.5]);

    for d in Deficiency::ALL {
        let segment = confusion_segment(mid_grey, &model, d, &SlabIntersection);
        assert!(segment.is_some(), "no segment for {}", d);
    }
}

#[test]
fn segment_runs_along_the_confusion_axis() {
    let model = LmsModel::smith_pokorny_75().unwrap();
    let lms = model.lms_from_linear_rgb().multiply_vec([0.4, 0.3, 0.6]);

    for d in Deficiency::ALL {
        let (a, b) = confusion_segment(lms, &model, d, &SlabIntersection).unwrap();
        let axis = confusion_axis(d);
        // Endpoints differ only along the deficiency axis
        for c in 0..3 {
            if axis[c] == 0.0 {
                assert!(
                    (a[c] - b[c]).abs() < 1e-9,
                    "{} endpoints differ off-axis",
                    d
                );
            }
        }
        assert!(
            (a[0] - b[0]).abs() + (a[1] - b[1]).abs() + (a[2] - b[2]).abs() > 1e-9,
            "degenerate segment for {}",
            d
        );
    }
}

#[test]
fn segment_endpoints_are_on_the_gamut_boundary() {
    let model = LmsModel::smith_pokorny_75().unwrap();
    let rgb_from_lms = model.linear_rgb_from_lms();
    let lms = model.lms_from_linear_rgb().multiply_vec([0.5, 0.5, 0.5]);

    for d in Deficiency::ALL {
        let (a, b) = confusion_segment(lms, &model, d, &SlabIntersection).unwrap();
        for endpoint in [a, b] {
            let rgb = rgb_from_lms.multiply_vec(endpoint);
            // Inside the cube...
            for &v in &rgb {
                assert!((-1e-9..=1.0 + 1e-9).contains(&v), "endpoint outside gamut");
            }
            // ...and touching at least one face
            let on_face = rgb
                .iter()
                .any(|&v| v.abs() < 1e-9 || (v - 1.0).abs() < 1e-9);
            assert!(on_face, "endpoint not on the gamut boundary: {:?}", rgb);
        }
    }
}

#[test]
fn no_segment_for_out_of_gamut_colors() {
    let model = LmsModel::smith_pokorny_75().unwrap();
    // LMS of a point far outside the RGB gamut
    let lms = model.lms_from_linear_rgb().multiply_vec([5.0, -3.0, 9.0]);
    let segment = confusion_segment(lms, &model, Deficiency::Protan, &SlabIntersection);
    assert!(segment.is_none());
}
