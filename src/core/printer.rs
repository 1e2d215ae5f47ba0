use crate::core::{ConfigProvider, Person, TransportMode};
use crate::utils::error::Result;
use std::fmt::Display;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};

pub const DEFAULT_TREE_INDENT: usize = 4;

/// Line writer that prefixes every line with the current indentation.
pub struct IndentedWriter<W: Write> {
    inner: W,
    width: usize,
    level: usize,
}

impl<W: Write> IndentedWriter<W> {
    pub fn new(inner: W, width: usize) -> Self {
        Self {
            inner,
            width,
            level: 0,
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn write_line(&mut self, line: impl Display) -> io::Result<()> {
        let pad = self.level * self.width;
        writeln!(self.inner, "{:pad$}{}", "", line, pad = pad)
    }

    /// Opens one nesting level; it closes when the guard drops.
    pub fn indent(&mut self) -> IndentGuard<'_, W> {
        self.level += 1;
        IndentGuard { writer: self }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

pub struct IndentGuard<'a, W: Write> {
    writer: &'a mut IndentedWriter<W>,
}

impl<W: Write> Deref for IndentGuard<'_, W> {
    type Target = IndentedWriter<W>;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl<W: Write> DerefMut for IndentGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl<W: Write> Drop for IndentGuard<'_, W> {
    fn drop(&mut self) {
        self.writer.level -= 1;
    }
}

/// Renders a decoded [`Person`] as an indented text tree.
pub struct HierarchyPrinter<W: Write> {
    writer: IndentedWriter<W>,
}

impl<W: Write> HierarchyPrinter<W> {
    pub fn new(inner: W, tree_indent: usize) -> Self {
        Self {
            writer: IndentedWriter::new(inner, tree_indent),
        }
    }

    pub fn from_config<C: ConfigProvider>(inner: W, config: &C) -> Self {
        Self::new(inner, config.tree_indent())
    }

    pub fn write_person(&mut self, person: &Person) -> Result<()> {
        write_person(&mut self.writer, person)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

fn write_person<W: Write>(writer: &mut IndentedWriter<W>, person: &Person) -> io::Result<()> {
    writer.write_line(format_args!("Name: {}", person.name))?;
    writer.write_line("ModeOfTransportations {")?;
    {
        let mut block = writer.indent();
        for mode in &person.transport_modes {
            match mode {
                Some(mode) => write_mode(&mut block, mode)?,
                None => block.write_line("null")?,
            }
        }
    }
    writer.write_line("}")
}

fn write_mode<W: Write>(writer: &mut IndentedWriter<W>, mode: &TransportMode) -> io::Result<()> {
    writer.write_line(format_args!("{} {{", mode.kind()))?;
    {
        let mut block = writer.indent();
        block.write_line(format_args!("Brand: {}", mode.brand()))?;
        block.write_line(format_args!("WeightInKilograms: {}", mode.weight_kg()))?;

        match mode {
            TransportMode::Bike(bike) => block.write_line(format_args!("Size: {}", bike.size))?,
            TransportMode::Car(car) => {
                block.write_line(format_args!("NumberOfDoors: {}", car.doors))?
            }
        }
    }
    writer.write_line("}")
}

/// Renders into a string.
pub fn render_person(person: &Person, tree_indent: usize) -> Result<String> {
    let mut printer = HierarchyPrinter::new(Vec::new(), tree_indent);
    printer.write_person(person)?;
    Ok(String::from_utf8_lossy(&printer.into_inner()).into_owned())
}
