use crate::types::*;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page geometry plus section heights: everything the splitter needs
/// besides the content itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutOptions {
    pub geometry: PageGeometry,
    pub sections: SectionHeights,
}

/// A configuration the splitter accepts but renders badly
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutWarning {
    /// Remarks will be spread one line per page
    NonPositiveRemarksLine { line_mm: f32 },
    /// A section height below zero
    NegativeSection { name: &'static str, height_mm: f32 },
    /// Rows of this kind overflow any page they land on
    RowTallerThanPage {
        row: &'static str,
        row_mm: f32,
        content_mm: f32,
    },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutWarning::NonPositiveRemarksLine { line_mm } => write!(
                f,
                "remarks line height {line_mm}mm is not positive; \
                 remarks will be placed one line per page"
            ),
            LayoutWarning::NegativeSection { name, height_mm } => {
                write!(f, "section '{name}' has negative height {height_mm}mm")
            }
            LayoutWarning::RowTallerThanPage {
                row,
                row_mm,
                content_mm,
            } => write!(
                f,
                "{row} rows need {row_mm}mm but the page only has {content_mm}mm of content height"
            ),
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse layout options: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            LayoutError::Config(format!("Failed to serialize layout options: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Check the options before use.
    ///
    /// Geometry that has no usable content area is an error. Section
    /// heights the splitter tolerates but renders badly come back as
    /// warnings. The splitter itself never calls this.
    pub fn validate(&self) -> Result<Vec<LayoutWarning>> {
        let (width, height) = self.geometry.page_dimensions_mm();
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::Config(format!(
                "Paper dimensions must be positive, got {}x{}mm",
                width, height
            )));
        }

        let margin = self.geometry.margin_mm;
        if !margin.is_finite() || margin < 0.0 {
            return Err(LayoutError::Config(format!(
                "Margin must be zero or positive, got {}mm",
                margin
            )));
        }

        let content_mm = self.geometry.content_height_mm();
        if content_mm <= 0.0 {
            return Err(LayoutError::Config(format!(
                "Margin of {}mm leaves no content height on a {}mm page",
                margin, height
            )));
        }

        let mut warnings = Vec::new();
        let s = &self.sections;

        for (name, height_mm) in [
            ("first_header", s.first_header_mm),
            ("continuation_header", s.continuation_header_mm),
            ("table_header", s.table_header_mm),
            ("item_row", s.item_row_mm),
            ("summary_row", s.summary_row_mm),
            ("remarks_base", s.remarks_base_mm),
            ("remarks_line", s.remarks_line_mm),
            ("button", s.button_mm),
            ("footer", s.footer_mm),
        ] {
            if height_mm < 0.0 {
                warnings.push(LayoutWarning::NegativeSection { name, height_mm });
            }
        }

        if s.remarks_line_mm.is_nan() || s.remarks_line_mm <= 0.0 {
            warnings.push(LayoutWarning::NonPositiveRemarksLine {
                line_mm: s.remarks_line_mm,
            });
        }

        for (row, row_mm) in [("item", s.item_row_mm), ("summary", s.summary_row_mm)] {
            if row_mm > content_mm {
                warnings.push(LayoutWarning::RowTallerThanPage {
                    row,
                    row_mm,
                    content_mm,
                });
            }
        }

        Ok(warnings)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Named sizes serialize as plain strings, custom sizes as a map.
    impl Serialize for PaperSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;
            match self {
                PaperSize::A3 => serializer.serialize_str("A3"),
                PaperSize::A4 => serializer.serialize_str("A4"),
                PaperSize::B5 => serializer.serialize_str("B5"),
                PaperSize::Custom {
                    width_mm,
                    height_mm,
                } => {
                    let mut s = serializer.serialize_struct("Custom", 2)?;
                    s.serialize_field("width_mm", width_mm)?;
                    s.serialize_field("height_mm", height_mm)?;
                    s.end()
                }
            }
        }
    }

    impl<'de> Deserialize<'de> for PaperSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            use serde::de::{self, MapAccess, Visitor};

            struct PaperSizeVisitor;

            impl<'de> Visitor<'de> for PaperSizeVisitor {
                type Value = PaperSize;

                fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    formatter.write_str("a paper size name or {width_mm, height_mm}")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<PaperSize, E>
                where
                    E: de::Error,
                {
                    match value {
                        "A3" => Ok(PaperSize::A3),
                        "A4" => Ok(PaperSize::A4),
                        "B5" => Ok(PaperSize::B5),
                        _ => Err(de::Error::unknown_variant(
                            value,
                            &["A3", "A4", "B5", "Custom"],
                        )),
                    }
                }

                fn visit_map<M>(self, mut map: M) -> std::result::Result<PaperSize, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut width_mm = None;
                    let mut height_mm = None;

                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "width_mm" => width_mm = Some(map.next_value()?),
                            "height_mm" => height_mm = Some(map.next_value()?),
                            _ => {
                                let _: serde::de::IgnoredAny = map.next_value()?;
                            }
                        }
                    }

                    match (width_mm, height_mm) {
                        (Some(w), Some(h)) => Ok(PaperSize::Custom {
                            width_mm: w,
                            height_mm: h,
                        }),
                        (None, _) => Err(de::Error::missing_field("width_mm")),
                        (_, None) => Err(de::Error::missing_field("height_mm")),
                    }
                }
            }

            deserializer.deserialize_any(PaperSizeVisitor)
        }
    }
}
