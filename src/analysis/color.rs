//! Per-channel color statistics: mean color and standard deviation

use image::RgbImage;

/// Mean color of an image, one value per RGB channel
///
/// An empty image yields all zeros.
pub fn mean_color(image: &RgbImage) -> [f64; 3] {
    let count = (image.width() * image.height()) as f64;
    if count == 0.0 {
        return [0.0; 3];
    }

    let mut sums = [0.0f64; 3];
    for pixel in image.pixels() {
        let [r, g, b] = pixel.0;
        sums[0] += f64::from(r);
        sums[1] += f64::from(g);
        sums[2] += f64::from(b);
    }
    [sums[0] / count, sums[1] / count, sums[2] / count]
}

/// Per-channel population standard deviation, a contrast measure
///
/// An empty image yields all zeros.
pub fn std_dev(image: &RgbImage) -> [f64; 3] {
    let count = (image.width() * image.height()) as f64;
    if count == 0.0 {
        return [0.0; 3];
    }

    let means = mean_color(image);
    let mut squares = [0.0f64; 3];
    for pixel in image.pixels() {
        let [r, g, b] = pixel.0;
        squares[0] += (f64::from(r) - means[0]).powi(2);
        squares[1] += (f64::from(g) - means[1]).powi(2);
        squares[2] += (f64::from(b) - means[2]).powi(2);
    }
    [
        (squares[0] / count).sqrt(),
        (squares[1] / count).sqrt(),
        (squares[2] / count).sqrt(),
    ]
}
