use crate::venue::parse_decimal;
use std::io::{self, BufRead, Write};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Latitude => "Широта",
            Axis::Longitude => "Долгота",
        }
    }

    pub fn limit(&self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }

    /// Parses a coordinate in decimal degrees, `.` or `,` as the separator.
    pub fn parse(&self, text: &str) -> Option<f64> {
        parse_decimal(text).filter(|value| value.is_finite() && value.abs() <= self.limit())
    }
}

/// Asks for a coordinate until the answer parses. Fails only when input runs out.
pub fn read_coordinate<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    axis: Axis,
) -> io::Result<f64> {
    let mut buf = Vec::new();
    loop {
        write!(output, "{}: ", axis.label())?;
        output.flush()?;

        buf.clear();
        // Consoles in legacy code pages can send bytes that are not UTF-8.
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("input ended before {} was entered", axis.label()),
            ));
        }

        let line = String::from_utf8_lossy(&buf);
        match axis.parse(&line) {
            Some(value) => return Ok(value),
            None => {
                tracing::warn!("rejected {:?} input: {:?}", axis, line.trim());
                writeln!(
                    output,
                    "Введите число от -{limit} до {limit}, например 55,75",
                    limit = axis.limit()
                )?;
            }
        }
    }
}
