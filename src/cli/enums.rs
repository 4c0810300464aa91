//! CLI enum types for the output format and paper size options.

use clap::ValueEnum;

use crate::render::{OutputType, PaperSize};

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    Text,
    Postscript,
    Pdf,
}

impl From<OutputKind> for OutputType {
    fn from(k: OutputKind) -> Self {
        match k {
            OutputKind::Text => OutputType::Text,
            OutputKind::Postscript => OutputType::PostScript,
            OutputKind::Pdf => OutputType::Pdf,
        }
    }
}

/// Paper size for page outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Paper {
    A6,
    A5,
    A4,
    A3,
    A2,
    A1,
    A0,
    Letter,
}

impl From<Paper> for PaperSize {
    fn from(p: Paper) -> Self {
        match p {
            Paper::A6 => PaperSize::A6,
            Paper::A5 => PaperSize::A5,
            Paper::A4 => PaperSize::A4,
            Paper::A3 => PaperSize::A3,
            Paper::A2 => PaperSize::A2,
            Paper::A1 => PaperSize::A1,
            Paper::A0 => PaperSize::A0,
            Paper::Letter => PaperSize::Letter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_kind_to_output_type() {
        assert_eq!(OutputType::from(OutputKind::Text), OutputType::Text);
        assert_eq!(
            OutputType::from(OutputKind::Postscript),
            OutputType::PostScript
        );
        assert_eq!(OutputType::from(OutputKind::Pdf), OutputType::Pdf);
    }

    #[test]
    fn test_paper_to_paper_size() {
        assert_eq!(PaperSize::from(Paper::A6), PaperSize::A6);
        assert_eq!(PaperSize::from(Paper::A3), PaperSize::A3);
        assert_eq!(PaperSize::from(Paper::Letter), PaperSize::Letter);
    }

    #[test]
    fn test_paper_value_names() {
        assert_eq!(Paper::from_str("a4", true), Ok(Paper::A4));
        assert_eq!(Paper::from_str("letter", true), Ok(Paper::Letter));
        assert!(Paper::from_str("b5", true).is_err());
    }
}
