use bizdoc_layout::LayoutOptions;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub layout: LayoutOptions,
    pub font_size_pt: f32,
    /// Printed before amounts in the PDF
    pub currency_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            layout: LayoutOptions::default(),
            font_size_pt: 10.0,
            currency_prefix: String::new(),
        }
    }
}
