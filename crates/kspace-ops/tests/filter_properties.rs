//! Properties every filter topology must satisfy.

use approx::assert_abs_diff_eq;
use kspace_ops::builders::{
    build_band_pass, build_band_stop, build_high_pass, build_horizontal_band_pass,
    build_horizontal_band_stop, build_low_pass, build_notch, build_vertical_band_pass,
    build_vertical_band_stop, Construction,
};
use kspace_ops::filter::{Filter, NotchGeometry};
use kspace_ops::resize::{resize_to_match, Contour};
use kspace_ops::Dim;
use kspace_window::{WindowFamily, WindowSpec};
use ndarray::Array2;

fn windows() -> Vec<WindowSpec> {
    vec![
        WindowSpec::Simple(WindowFamily::Hanning),
        WindowSpec::Simple(WindowFamily::Blackman),
        WindowSpec::Shaped(WindowFamily::Kaiser, 6.0),
        WindowSpec::Shaped(WindowFamily::Chebwin, 80.0),
    ]
}

const DIMS: [Dim; 3] = [(32, 32), (24, 40), (41, 17)];

fn assert_sums_to_one(a: &Array2<f64>, b: &Array2<f64>, what: &str) {
    assert_eq!(a.dim(), b.dim(), "{what}");
    for (x, y) in a.iter().zip(b.iter()) {
        assert_abs_diff_eq!(x + y, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn low_and_high_pass_are_complements() {
    for window in windows() {
        for dim in DIMS {
            for construction in [Construction::Outer, Construction::Rotational] {
                for contour in [Contour::ConstPercentage, Contour::ConstPixel] {
                    for diameter in [0, 9, 20] {
                        let lp = build_low_pass(&window, dim, diameter, construction, contour);
                        let hp = build_high_pass(&window, dim, diameter, construction, contour);
                        assert_eq!(lp.dim(), dim);
                        assert_sums_to_one(&lp, &hp, &format!("{window} {dim:?}"));
                    }
                }
            }
        }
    }
}

#[test]
fn band_pass_and_stop_are_complements() {
    for window in windows() {
        for dim in DIMS {
            for contour in [Contour::ConstPercentage, Contour::ConstPixel] {
                let bp = build_band_pass(&window, dim, 16, 5, contour).unwrap();
                let bs = build_band_stop(&window, dim, 16, 5, contour).unwrap();
                assert_eq!(bp.dim(), dim);
                assert_sums_to_one(&bp, &bs, &format!("{window} {dim:?}"));
            }
        }
    }
}

#[test]
fn stripe_pass_and_stop_are_complements() {
    for window in windows() {
        for dim in DIMS {
            for center in [-2, 0, 7, 16, 50] {
                let vbp = build_vertical_band_pass(&window, dim, center, 5);
                let vbs = build_vertical_band_stop(&window, dim, center, 5);
                assert_sums_to_one(&vbp, &vbs, "vertical");

                let hbp = build_horizontal_band_pass(&window, dim, center, 5);
                let hbs = build_horizontal_band_stop(&window, dim, center, 5);
                assert_eq!(hbp.dim(), dim);
                assert_sums_to_one(&hbp, &hbs, "horizontal");
            }
        }
    }
}

#[test]
fn horizontal_is_transposed_vertical() {
    let window = WindowSpec::Simple(WindowFamily::Triang);
    let h = build_horizontal_band_pass(&window, (20, 12), 8, 7);
    let v = build_vertical_band_pass(&window, (12, 20), 8, 7);
    assert_eq!(h, v.t());
}

#[test]
fn resize_hits_exact_shape_for_every_sign_combination() {
    let w = Array2::from_shape_fn((10, 10), |(i, j)| (i + j) as f64);
    // (grow, grow), (grow, shrink), (shrink, grow), (shrink, shrink)
    for size in [(14, 13), (15, 4), (5, 16), (3, 7)] {
        for contour in [Contour::ConstPercentage, Contour::ConstPixel] {
            assert_eq!(resize_to_match(&w, size, contour, None).dim(), size);
            assert_eq!(resize_to_match(&w, size, contour, Some((-3, 5))).dim(), size);
        }
    }
}

#[test]
fn boxcar_outer_low_pass_on_8x8() {
    let boxcar = WindowSpec::Simple(WindowFamily::Boxcar);
    let lp = build_low_pass(&boxcar, (8, 8), 4, Construction::Outer, Contour::ConstPercentage);
    let mut expected = Array2::<f64>::zeros((8, 8));
    expected.slice_mut(ndarray::s![2..6, 2..6]).fill(1.0);
    assert_eq!(lp, expected);
}

#[test]
fn notch_removes_only_its_center() {
    let boxcar = WindowSpec::Simple(WindowFamily::Boxcar);
    let dim = (64, 64);
    let center = (20, 41);
    let width = 7;

    let nf = build_notch(&boxcar, dim, center, width);
    assert_eq!(nf[[20, 41]], 0.0);
    for ((i, j), v) in nf.indexed_iter() {
        let dr = i as f64 - center.0 as f64;
        let dc = j as f64 - center.1 as f64;
        if (dr * dr + dc * dc).sqrt() > width as f64 / 2.0 + 1.0 {
            assert_eq!(*v, 1.0, "({i}, {j})");
        }
    }

    let filter = Filter::notch(NotchGeometry::new(boxcar, dim, center).width(width)).unwrap();
    let out = filter.apply(&Array2::<f64>::ones(dim)).unwrap();
    assert_eq!(out, nf);
}

#[test]
fn rotational_masks_stay_in_unit_range() {
    for window in windows() {
        let lp = build_low_pass(&window, (33, 33), 0, Construction::Rotational, Contour::ConstPercentage);
        assert!(lp.iter().all(|&v| (-1e-12..=1.0 + 1e-12).contains(&v)), "{window}");
    }
}
