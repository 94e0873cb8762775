use crate::fd_core::condition::PointInit;

/// A harmonic wave over the grid coordinate in degrees:
/// u(x) = amplitude · cos(wavenumber · x°). The coursework field is
/// `harmonic(20.0, 3.0)`.
pub fn harmonic(amplitude: f64, wavenumber: f64) -> PointInit<Box<dyn Fn(f64) -> f64>> {
    PointInit {
        f: Box::new(move |x| amplitude * (wavenumber * x).to_radians().cos()),
    }
}

/// A square-box initial condition, set to 1.0 in [x_left, x_right], else 0.0.
pub fn square_box(x_left: f64, x_right: f64) -> PointInit<Box<dyn Fn(f64) -> f64>> {
    PointInit {
        f: Box::new(move |x| {
            if x >= x_left && x <= x_right {
                1.0
            } else {
                0.0
            }
        }),
    }
}
