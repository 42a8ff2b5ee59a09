use opencv::core::Point;
use opencv::core::Rect;
use opencv::core::Scalar;
use opencv::imgproc::put_text;
use opencv::imgproc::rectangle;
use opencv::imgproc::FILLED;
use opencv::imgproc::FONT_HERSHEY_COMPLEX_SMALL;
use opencv::imgproc::LINE_8;
use opencv::prelude::Mat;
use opencv::prelude::MatTraitConst;

// BGR
fn green() -> Scalar {
    Scalar::from((0.0, 255.0, 0.0))
}

fn magenta() -> Scalar {
    Scalar::from((255.0, 0.0, 255.0))
}

fn red() -> Scalar {
    Scalar::from((0.0, 0.0, 255.0))
}

const THICKNESS_PX: i32 = 2;

/// Outlines a plate candidate and labels it just above its top-left corner.
pub fn draw_plate_marker(image: &mut Mat, plate: Rect) -> opencv::Result<()> {
    rectangle(image, plate, green(), THICKNESS_PX, LINE_8, 0)?;
    put_text(
        image,
        "Number Plate",
        Point::new(plate.x, plate.y - 5),
        FONT_HERSHEY_COMPLEX_SMALL,
        1.0,
        magenta(),
        THICKNESS_PX,
        LINE_8,
        false,
    )
}

/// Paints the band shown while a snapshot is confirmed.
pub fn draw_saved_banner(image: &mut Mat) -> opencv::Result<()> {
    let band = Rect::new(0, 200, image.cols(), 100);
    rectangle(image, band, green(), FILLED, LINE_8, 0)?;
    put_text(
        image,
        "Plate Saved",
        Point::new(150, 265),
        FONT_HERSHEY_COMPLEX_SMALL,
        2.0,
        red(),
        THICKNESS_PX,
        LINE_8,
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::Vec3b;
    use opencv::core::CV_8UC3;

    fn black_frame() -> Mat {
        Mat::new_rows_cols_with_default(480, 640, CV_8UC3, Scalar::all(0.0)).unwrap()
    }

    #[test]
    fn test_marker_outlines_region() {
        let mut frame = black_frame();
        draw_plate_marker(&mut frame, Rect::new(100, 100, 80, 30)).unwrap();

        let left_edge = frame.at_2d::<Vec3b>(120, 100).unwrap();
        assert_eq!((left_edge[0], left_edge[1], left_edge[2]), (0, 255, 0));

        let inside = frame.at_2d::<Vec3b>(115, 140).unwrap();
        assert_eq!((inside[0], inside[1], inside[2]), (0, 0, 0));
    }

    #[test]
    fn test_banner_covers_band() {
        let mut frame = black_frame();
        draw_saved_banner(&mut frame).unwrap();

        let in_band = frame.at_2d::<Vec3b>(210, 5).unwrap();
        assert_eq!((in_band[0], in_band[1], in_band[2]), (0, 255, 0));

        let above = frame.at_2d::<Vec3b>(150, 5).unwrap();
        assert_eq!((above[0], above[1], above[2]), (0, 0, 0));
    }
}
