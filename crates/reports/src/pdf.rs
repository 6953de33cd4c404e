//! Rasterized-document (PDF) rendering: screenshot-and-paginate.
//!
//! The exporter does not re-lay-out the report. It takes whatever bitmap
//! the render surface captured, scales it to full A4 width, and slices it
//! across as many portrait pages as the scaled height needs by drawing the
//! same image at progressively negative vertical offsets. Content fidelity
//! is therefore exactly the on-screen layout at capture time.

use printpdf::{Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, RawImage, XObjectTransform};

use crate::ReportError;

/// A4 portrait.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// A bitmap capture of the rendered dashboard surface.
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    /// PNG-encoded pixels.
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Source of dashboard captures. The real implementation lives in the UI
/// shell; reports only need the bitmap.
pub trait RenderSurface {
    fn capture(&self) -> Result<CapturedFrame, ReportError>;
}

/// Serialize a captured frame into PDF bytes, one A4 page per full-width
/// slice of the image.
pub fn render(frame: &CapturedFrame) -> Result<Vec<u8>, ReportError> {
    if frame.width_px == 0 || frame.height_px == 0 {
        return Err(ReportError::Surface(
            "captured frame has zero dimensions".to_string(),
        ));
    }

    let mut warnings = Vec::new();
    let image = RawImage::decode_from_bytes(&frame.png, &mut warnings)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    let mut doc = PdfDocument::new("Inventory Analysis Report");
    let image_id = doc.add_image(&image);

    // Scale the capture to full page width; height follows the aspect ratio.
    let image_height_mm = frame.height_px as f32 * PAGE_WIDTH_MM / frame.width_px as f32;

    const DPI: f32 = 300.0;
    let native_width_pt = frame.width_px as f32 * 72.0 / DPI;
    let scale = Mm(PAGE_WIDTH_MM).into_pt().0 / native_width_pt;

    let pages = page_offsets(image_height_mm, PAGE_HEIGHT_MM)
        .into_iter()
        .map(|offset_mm| {
            // `offset_mm` is where the image top sits relative to the page
            // top (0 or negative). PDF user space measures from the
            // bottom-left corner, so convert to the image's bottom edge.
            let translate_y_mm = PAGE_HEIGHT_MM - image_height_mm - offset_mm;
            let ops = vec![Op::UseXobject {
                id: image_id.clone(),
                transform: XObjectTransform {
                    translate_x: Some(Pt(0.0)),
                    translate_y: Some(Mm(translate_y_mm).into_pt()),
                    rotate: None,
                    scale_x: Some(scale),
                    scale_y: Some(scale),
                    dpi: Some(DPI),
                },
            }];
            PdfPage::new(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), ops)
        })
        .collect();

    Ok(doc
        .with_pages(pages)
        .save(&PdfSaveOptions::default(), &mut warnings))
}

/// Vertical offsets (mm, from the page top) at which the full image is drawn
/// on successive pages: 0 for the first page, then one page-height further up
/// each time until the remaining height is exhausted.
pub fn page_offsets(image_height_mm: f32, page_height_mm: f32) -> Vec<f32> {
    let mut offsets = vec![0.0];
    let mut height_left = image_height_mm - page_height_mm;
    while height_left >= 0.0 {
        offsets.push(height_left - image_height_mm);
        height_left -= page_height_mm;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_captures_fit_on_one_page() {
        assert_eq!(page_offsets(100.0, PAGE_HEIGHT_MM), vec![0.0]);
        assert_eq!(page_offsets(296.9, PAGE_HEIGHT_MM), vec![0.0]);
    }

    #[test]
    fn tall_captures_step_up_by_one_page_height() {
        let offsets = page_offsets(700.0, PAGE_HEIGHT_MM);
        assert_eq!(offsets, vec![0.0, -297.0, -594.0]);
    }

    #[test]
    fn exact_page_multiples_keep_the_trailing_page() {
        // Mirrors the reference behavior: a capture exactly one page tall
        // still emits a second (blank-remainder) page.
        let offsets = page_offsets(297.0, 297.0);
        assert_eq!(offsets, vec![0.0, -297.0]);
    }

    #[test]
    fn zero_sized_frames_are_rejected() {
        let frame = CapturedFrame {
            png: Vec::new(),
            width_px: 0,
            height_px: 0,
        };
        assert!(matches!(render(&frame), Err(ReportError::Surface(_))));
    }

    #[test]
    fn garbage_png_bytes_fail_without_panicking() {
        let frame = CapturedFrame {
            png: vec![0xde, 0xad, 0xbe, 0xef],
            width_px: 10,
            height_px: 10,
        };
        assert!(matches!(render(&frame), Err(ReportError::Pdf(_))));
    }
}
