//! Minimal hand-built PDF output.
//!
//! The document always has the same eight objects:
//!
//! | id | object          |
//! |----|-----------------|
//! | 1  | Catalog         |
//! | 2  | Pages           |
//! | 3  | Page            |
//! | 4  | Font            |
//! | 5  | Content stream  |
//! | 6  | Info            |
//! | 7  | Glyph widths    |
//! | 8  | Font descriptor |
//!
//! Every object is serialized to its final bytes before the cross-reference
//! table is written, so each xref offset is the buffer length at the moment
//! the object was appended.

use std::io::Write as _;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::ascii::{AsciiGrid, LuminanceRamp};
use crate::error::AsciifyError;

use super::layout::{escape_char, fmt_num, PageLayout};
use super::RenderOptions;

/// File header: version line plus a binary comment so transfer tools treat
/// the file as binary.
pub const HEADER: &[u8] = b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n";

/// Advance width used for every glyph (monospace, 1/1000 em).
const GLYPH_WIDTH: u32 = 600;

const CATALOG_ID: u32 = 1;
const PAGES_ID: u32 = 2;
const PAGE_ID: u32 = 3;
const FONT_ID: u32 = 4;
const CONTENTS_ID: u32 = 5;
const INFO_ID: u32 = 6;
const WIDTHS_ID: u32 = 7;
const DESCRIPTOR_ID: u32 = 8;

/// Body of an indirect object.
#[derive(Debug, Clone)]
pub enum ObjectBody {
    /// Any non-stream object, already in PDF syntax.
    Direct(String),
    /// A stream: extra dictionary entries (besides `/Length`) and raw data.
    Stream { dict: String, data: Vec<u8> },
}

/// One numbered indirect object.
#[derive(Debug, Clone)]
pub struct PdfObject {
    pub id: u32,
    pub body: ObjectBody,
}

impl PdfObject {
    fn direct(id: u32, body: String) -> Self {
        Self {
            id,
            body: ObjectBody::Direct(body),
        }
    }

    /// Final bytes of the object, from `N 0 obj` through `endobj\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        match &self.body {
            ObjectBody::Direct(body) => {
                format!("{} 0 obj\n{}\nendobj\n", self.id, body).into_bytes()
            }
            ObjectBody::Stream { dict, data } => {
                let mut out = format!(
                    "{} 0 obj\n<< /Length {}{} >>\nstream\n",
                    self.id,
                    data.len(),
                    dict
                )
                .into_bytes();
                out.extend_from_slice(data);
                out.extend_from_slice(b"\nendstream\nendobj\n");
                out
            }
        }
    }
}

/// A cross-reference table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XrefEntry {
    pub offset: usize,
    pub generation: u16,
    pub in_use: bool,
}

impl XrefEntry {
    /// The reserved head of the free list, object 0.
    pub const FREE_HEAD: XrefEntry = XrefEntry {
        offset: 0,
        generation: 65535,
        in_use: false,
    };

    pub fn in_use(offset: usize) -> Self {
        Self {
            offset,
            generation: 0,
            in_use: true,
        }
    }

    /// Fixed 20-byte row: 10-digit offset, 5-digit generation, flag, EOL.
    pub fn to_line(&self) -> String {
        format!(
            "{:010} {:05} {} \n",
            self.offset,
            self.generation,
            if self.in_use { 'n' } else { 'f' }
        )
    }
}

/// A complete single-page document, ready to serialize.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    objects: Vec<PdfObject>,
    root: u32,
    info: u32,
}

impl PdfDocument {
    pub fn objects(&self) -> &[PdfObject] {
        &self.objects
    }

    /// Serialize header, objects, xref table and trailer.
    ///
    /// Objects are written in declaration order; the offset recorded for
    /// each is the output length just before its first byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let serialized: Vec<Vec<u8>> = self.objects.iter().map(PdfObject::to_bytes).collect();

        let body_len: usize = serialized.iter().map(Vec::len).sum();
        let mut out = Vec::with_capacity(HEADER.len() + body_len + 64 + 20 * serialized.len());
        out.extend_from_slice(HEADER);

        let mut xref = Vec::with_capacity(serialized.len() + 1);
        xref.push(XrefEntry::FREE_HEAD);
        for (object, bytes) in self.objects.iter().zip(&serialized) {
            log::debug!("Object {} at byte {}", object.id, out.len());
            xref.push(XrefEntry::in_use(out.len()));
            out.extend_from_slice(bytes);
        }

        let xref_start = out.len();
        let mut tail = format!("xref\n0 {}\n", xref.len());
        for entry in &xref {
            tail.push_str(&entry.to_line());
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            xref.len(),
            self.root,
            self.info,
            xref_start
        ));
        out.extend_from_slice(tail.as_bytes());
        out
    }
}

/// Text-positioning operators for every inked cell.
///
/// Font and size are set once; each glyph then gets an absolute text matrix
/// at its page position.
pub fn content_stream(grid: &AsciiGrid, layout: &PageLayout) -> String {
    let mut out = format!("BT\n/F1 {} Tf\n", fmt_num(layout.scaled_font_size()));
    let mut cell = String::with_capacity(4);
    for (x, y, c) in grid.inked_cells() {
        let pos = layout.place(x, y);
        cell.clear();
        escape_char(c, &mut cell);
        out.push_str(&format!(
            "1 0 0 1 {} {} Tm ({}) Tj\n",
            fmt_num(pos.x),
            fmt_num(pos.y),
            cell
        ));
    }
    out.push_str("ET");
    out
}

fn deflate(data: &[u8]) -> Result<Vec<u8>, AsciifyError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).map_err(AsciifyError::Compress)?;
    encoder.finish().map_err(AsciifyError::Compress)
}

/// Assemble the object graph for `grid`.
pub fn build(
    grid: &AsciiGrid,
    ramp: &LuminanceRamp,
    options: &RenderOptions,
) -> Result<PdfDocument, AsciifyError> {
    let layout = PageLayout::new(grid, options.paper, &options.margin)?;
    let font = &options.font_name;

    let stream = content_stream(grid, &layout);
    let contents = if options.compress {
        let data = deflate(stream.as_bytes())?;
        log::debug!(
            "Content stream deflated {} -> {} bytes",
            stream.len(),
            data.len()
        );
        ObjectBody::Stream {
            dict: " /Filter /FlateDecode".to_string(),
            data,
        }
    } else {
        ObjectBody::Stream {
            dict: String::new(),
            data: stream.into_bytes(),
        }
    };

    let (first_char, last_char) = ramp.code_range();
    let widths = vec![GLYPH_WIDTH.to_string(); (last_char - first_char + 1) as usize];

    let objects = vec![
        PdfObject::direct(
            CATALOG_ID,
            format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID),
        ),
        PdfObject::direct(
            PAGES_ID,
            format!("<< /Type /Pages /Kids [{} 0 R] /Count 1 >>", PAGE_ID),
        ),
        PdfObject::direct(
            PAGE_ID,
            format!(
                "<< /Type /Page /Parent {} 0 R\n   /MediaBox [0 0 {} {}]\n   \
                 /Resources << /Font << /F1 {} 0 R >> >>\n   /Contents {} 0 R >>",
                PAGES_ID,
                fmt_num(layout.paper.width),
                fmt_num(layout.paper.height),
                FONT_ID,
                CONTENTS_ID
            ),
        ),
        PdfObject::direct(
            FONT_ID,
            format!(
                "<< /Type /Font /Subtype /TrueType /Name /F1\n   /BaseFont /{}\n   \
                 /FirstChar {} /LastChar {}\n   /Widths {} 0 R\n   \
                 /FontDescriptor {} 0 R\n   /Encoding /WinAnsiEncoding >>",
                font, first_char, last_char, WIDTHS_ID, DESCRIPTOR_ID
            ),
        ),
        PdfObject {
            id: CONTENTS_ID,
            body: contents,
        },
        PdfObject::direct(
            INFO_ID,
            format!(
                "<< /Producer (asciify) /Creator (asciify)\n   \
                 /Subject (retro computing) /Keywords (ASCII art fun)\n   \
                 /CreationDate (D:{}) >>",
                options.created.format("%Y%m%d%H%M%S")
            ),
        ),
        PdfObject::direct(WIDTHS_ID, format!("[{}]", widths.join(" "))),
        PdfObject::direct(
            DESCRIPTOR_ID,
            format!(
                "<< /Type /FontDescriptor /FontName /{}\n   /Flags 33 \
                 /FontBBox [-23 -250 715 805] /ItalicAngle 0\n   \
                 /Ascent 629 /Descent -157 /CapHeight 562 /StemV 51 >>",
                font
            ),
        ),
    ];

    Ok(PdfDocument {
        objects,
        root: CATALOG_ID,
        info: INFO_ID,
    })
}

/// Render `grid` as PDF bytes.
pub fn render(
    grid: &AsciiGrid,
    ramp: &LuminanceRamp,
    options: &RenderOptions,
) -> Result<Vec<u8>, AsciifyError> {
    Ok(build(grid, ramp, options)?.to_bytes())
}
