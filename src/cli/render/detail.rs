//! Detail mode
//!
//! A hand-assembled list of labeled fields for one record. Labels in a
//! block are padded to a common width so values line up.

use std::io::{self, Write};

use super::{pad, text_width, Renderer, Tone};

const LABEL_GAP: usize = 2;

#[derive(Debug, Clone, PartialEq)]
struct Field {
    label: String,
    value: String,
    tone: Tone,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Block {
    fields: Vec<Field>,
}

impl Block {
    fn push(&mut self, label: &str, value: String, tone: Tone) {
        self.fields.push(Field {
            label: format!("{label}:"),
            value,
            tone,
        });
    }

    fn label_width(&self) -> usize {
        self.fields
            .iter()
            .map(|f| text_width(&f.label))
            .max()
            .unwrap_or(0)
            + LABEL_GAP
    }

    fn write<W: Write>(&self, out: &mut W, r: &Renderer, indent: &str) -> io::Result<()> {
        let width = self.label_width();
        for field in &self.fields {
            writeln!(
                out,
                "{indent}{}{}",
                pad(&field.label, width),
                r.paint(&field.value, field.tone)
            )?;
        }
        Ok(())
    }
}

/// Nested group of fields under a heading (e.g. git metadata).
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    heading: String,
    body: SectionBody,
}

#[derive(Debug, Clone, PartialEq)]
enum SectionBody {
    Fields(Block),
    Bullets(Vec<(String, Tone)>),
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: SectionBody::Fields(Block::default()),
        }
    }

    /// Bulleted list of scalar values. Empty lists are dropped by `DetailView`.
    pub fn bullets(heading: impl Into<String>, items: Vec<String>, tone: Tone) -> Self {
        Self {
            heading: heading.into(),
            body: SectionBody::Bullets(items.into_iter().map(|i| (i, tone)).collect()),
        }
    }

    pub fn field(self, label: &str, value: impl Into<String>) -> Self {
        self.toned(label, value, Tone::Plain)
    }

    pub fn toned(mut self, label: &str, value: impl Into<String>, tone: Tone) -> Self {
        if let SectionBody::Fields(block) = &mut self.body {
            block.push(label, value.into(), tone);
        }
        self
    }

    fn is_empty(&self) -> bool {
        match &self.body {
            SectionBody::Fields(block) => block.fields.is_empty(),
            SectionBody::Bullets(items) => items.is_empty(),
        }
    }
}

/// One record rendered as title, fields and optional sections.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    title: String,
    fields: Block,
    sections: Vec<Section>,
}

impl DetailView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Block::default(),
            sections: Vec::new(),
        }
    }

    pub fn field(self, label: &str, value: impl Into<String>) -> Self {
        self.toned(label, value, Tone::Plain)
    }

    pub fn toned(mut self, label: &str, value: impl Into<String>, tone: Tone) -> Self {
        self.fields.push(label, value.into(), tone);
        self
    }

    /// Add a section; `None` (absent nested object) and empty sections are skipped.
    pub fn section(mut self, section: Option<Section>) -> Self {
        if let Some(section) = section.filter(|s| !s.is_empty()) {
            self.sections.push(section);
        }
        self
    }
}

impl Renderer {
    pub fn detail<W: Write>(&self, out: &mut W, view: &DetailView) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.heading(&view.title))?;
        writeln!(out)?;
        view.fields.write(out, self, "")?;

        for section in &view.sections {
            writeln!(out)?;
            writeln!(out, "{}:", section.heading)?;
            match &section.body {
                SectionBody::Fields(block) => block.write(out, self, "  ")?,
                SectionBody::Bullets(items) => {
                    for (item, tone) in items {
                        writeln!(out, "  • {}", self.paint(item, *tone))?;
                    }
                }
            }
        }

        writeln!(out)?;
        Ok(())
    }
}
