use approx::assert_abs_diff_eq;
use disk_sampler::{point_in_disk, ChordDisk, Point, SampleError, UniformDisk};
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn samples_stay_inside_disk() {
    let mut rng = StdRng::seed_from_u64(2024);
    for &r in &[1e-3, 0.75, 1.0, 2.0, 123.456] {
        for _ in 0..20_000 {
            let p = point_in_disk(&mut rng, r).unwrap();
            assert!(p.norm_squared() <= r * r + 1e-6, "{p} outside r={r}");
        }
    }
}

#[test]
fn zero_radius_always_origin() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1_000 {
        let p = point_in_disk(&mut rng, 0.0).unwrap();
        assert_eq!(p, Point::new(0.0, 0.0));
    }
}

#[test]
fn coordinates_respect_chord_bounds() {
    let mut rng = StdRng::seed_from_u64(77);
    let r = 1.5;
    for _ in 0..20_000 {
        let p = point_in_disk(&mut rng, r).unwrap();
        assert!(p.x.abs() <= r);
        assert!(p.y.abs() <= (r * r - p.x * p.x).sqrt() + 1e-12);
    }
}

#[test]
fn seeded_single_sample_radius_two() {
    let mut rng = StdRng::seed_from_u64(0xD15C);
    let p = point_in_disk(&mut rng, 2.0).unwrap();
    assert!(p.x >= -2.0 && p.x < 2.0);
    let y_max = (4.0 - p.x * p.x).sqrt();
    assert!(p.y >= -y_max && p.y < y_max);

    let mut again = StdRng::seed_from_u64(0xD15C);
    assert_eq!(point_in_disk(&mut again, 2.0).unwrap(), p);
}

#[test]
fn negative_radius_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        point_in_disk(&mut rng, -2.0),
        Err(SampleError::InvalidRadius(-2.0))
    );
    assert!(ChordDisk::new(f64::NAN).is_err());
}

#[test]
fn chord_disk_crowds_the_rim() {
    // Outer strips |x| > 0.9 cover ~3.7% of the unit disk's area but get
    // 10% of the chord sampler's points.
    let disk = ChordDisk::new(1.0).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let n = 100_000;
    let outer = (0..n)
        .map(|_| disk.sample(&mut rng))
        .filter(|p| p.x.abs() > 0.9)
        .count();
    assert_abs_diff_eq!(outer as f64 / n as f64, 0.10, epsilon = 0.01);
}

#[test]
fn uniform_disk_matches_area() {
    let disk = UniformDisk::new(1.0).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    let n = 100_000;
    let inner = (0..n)
        .map(|_| disk.sample(&mut rng))
        .filter(|p| p.norm_squared() <= 0.25)
        .count();
    // The disk of radius 0.5 holds a quarter of the area.
    assert_abs_diff_eq!(inner as f64 / n as f64, 0.25, epsilon = 0.01);
}
