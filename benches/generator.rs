use rand::Rng;
use rectiles::Point;

/// Points with integer coordinates, uniformly spread over `[0, width) x [0, height)`.
pub fn uniform_lattice(width: u32, height: u32, num_points: usize) -> Vec<Point> {
    let mut rng = rand::thread_rng();
    (0..num_points)
        .map(|_| {
            Point::new(
                f64::from(rng.gen_range(0..width)),
                f64::from(rng.gen_range(0..height)),
            )
        })
        .collect()
}

/// A value function made of `count` vertical bands of random widths.
pub fn random_bands(width: u32, count: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let mut limits: Vec<f64> = (0..count)
        .map(|_| f64::from(rng.gen_range(0..width)))
        .collect();
    limits.sort_by(f64::total_cmp);
    limits
}
