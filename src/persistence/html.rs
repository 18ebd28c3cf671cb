//! Static HTML page used as a gallery view outside a browser.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::Result;

use crate::files;
use crate::persistence::dependencies::GalleryView;
use crate::util::decode_data_uri;

/// One element appended to the gallery container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryElement {
    Heading(String),
    Image(String),
}

#[derive(Debug, Default)]
struct GalleryPage {
    drawing_surface_hidden: bool,
    visible: bool,
    elements: Vec<GalleryElement>,
}

/// Collects gallery elements in memory and writes them out as `index.html`.
#[derive(Debug, Default)]
pub struct HtmlGalleryView {
    page: Mutex<GalleryPage>,
}

impl HtmlGalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    fn page(&self) -> MutexGuard<'_, GalleryPage> {
        // A poisoned lock only means a previous append panicked; the elements are still usable.
        self.page.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Elements appended so far, in order.
    pub fn elements(&self) -> Vec<GalleryElement> {
        self.page().elements.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.page().visible
    }

    pub fn drawing_surface_hidden(&self) -> bool {
        self.page().drawing_surface_hidden
    }

    /// Renders the current elements as a standalone HTML document.
    pub fn render_html(&self) -> String {
        let page = self.page();
        let mut html = String::from(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Drawings</title>\n</head>\n<body>\n<div id=\"drawing-container\">\n",
        );
        for element in &page.elements {
            match element {
                GalleryElement::Heading(text) => {
                    html.push_str(&format!("<h3>{}</h3>\n", html_escape::encode_text(text)));
                }
                GalleryElement::Image(src) => {
                    html.push_str(&format!(
                        "<img src=\"{}\">\n",
                        html_escape::encode_double_quoted_attribute(src)
                    ));
                }
            }
        }
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    /// Writes `index.html` into `directory`.
    ///
    /// With `extract_images`, every decodable data URI is also written next to
    /// it as `NNN-<owner>.<ext>`, named after the heading that precedes it.
    pub fn write_to(&self, directory: &Path, extract_images: bool) -> Result<PathBuf> {
        let directory = files::ensure_directory_exists(directory)?;
        let index = files::write_private_file(
            &directory.join("index.html"),
            self.render_html().as_bytes(),
        )?;

        if extract_images {
            let mut owner = String::new();
            let mut index_no = 0usize;
            for element in self.elements() {
                match element {
                    GalleryElement::Heading(text) => owner = text,
                    GalleryElement::Image(src) => {
                        index_no += 1;
                        let Some(image) = decode_data_uri(&src) else {
                            log::warn!("Skipping drawing {} with undecodable source", index_no);
                            continue;
                        };
                        let name = format!(
                            "{:03}-{}.{}",
                            index_no,
                            files::sanitize_file_stem(&owner),
                            image.extension()
                        );
                        files::write_private_file(&directory.join(name), &image.bytes)?;
                    }
                }
            }
        }

        Ok(index)
    }
}

impl GalleryView for HtmlGalleryView {
    fn hide_drawing_surface(&self) {
        self.page().drawing_surface_hidden = true;
    }

    fn clear(&self) {
        self.page().elements.clear();
    }

    fn append_heading(&self, text: &str) {
        self.page()
            .elements
            .push(GalleryElement::Heading(text.to_string()));
    }

    fn append_image(&self, src: &str) {
        self.page()
            .elements
            .push(GalleryElement::Image(src.to_string()));
    }

    fn show(&self) {
        self.page().visible = true;
    }
}
