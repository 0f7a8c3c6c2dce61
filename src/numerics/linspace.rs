use nalgebra as na;

/// `samples` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, samples: usize) -> na::DVector<f64> {
    match samples {
        0 => na::DVector::zeros(0),
        1 => na::DVector::from_element(1, start),
        _ => {
            let last = samples - 1;
            let step = (end - start) / last as f64;
            na::DVector::from_fn(samples, |i, _| {
                if i == last {
                    end
                } else {
                    start + step * i as f64
                }
            })
        }
    }
}
