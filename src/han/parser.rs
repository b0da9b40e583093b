use super::stroke::{HcfGroup, HcfOverlap, HcfPoint, HcfStroke};
use crate::error::{Result, StylusError};
use crate::geometry::Rectangle;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// A reference glyph read from HCF text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hcf {
    pub unicode: String,
    pub bounds: Rectangle,
    pub length: f64,
    pub minimum_stroke_length: f64,
    pub strokes: Vec<HcfStroke>,
    pub groups: Vec<HcfGroup>,
    pub overlaps: Vec<HcfOverlap>,
}

// Group directives wait until every stroke is known
struct PendingGroup {
    line: usize,
    indices: Vec<usize>,
}

impl Hcf {
    /// Read and parse an HCF file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| StylusError::HcfSource {
            path: path.display().to_string(),
            source,
        })?;
        let hcf = Self::parse(&text)?;

        log::info!(
            "Loaded han {} from {} ({} strokes, {} groups)",
            hcf.unicode,
            path.display(),
            hcf.strokes.len(),
            hcf.groups.len()
        );
        Ok(hcf)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut unicode = String::new();
        let mut strokes = Vec::new();
        let mut pending = Vec::new();
        let mut overlaps = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let content = raw.trim();
            if content.is_empty() {
                continue;
            }

            if let Some(rest) = content.strip_prefix("han:") {
                unicode = parse_unicode(rest).map_err(|reason| hcf_error(line, reason))?;
                log::debug!("Line {}: han {}", line, unicode);
            } else if let Some(rest) = content.strip_prefix("stroke:") {
                let stroke = parse_stroke(rest).map_err(|e| stroke_error(line, e))?;
                log::debug!(
                    "Line {}: stroke {} with {} points, length {:.3}",
                    line,
                    stroke.label,
                    stroke.forward.len(),
                    stroke.length
                );
                strokes.push(stroke);
            } else if let Some(rest) = content.strip_prefix("group:") {
                let indices = parse_indices(rest).map_err(|reason| hcf_error(line, reason))?;
                pending.push(PendingGroup { line, indices });
            } else if let Some(rest) = content.strip_prefix("overlap:") {
                overlaps.push((line, parse_overlap(rest).map_err(|reason| hcf_error(line, reason))?));
            } else {
                log::warn!("Ignoring unrecognised HCF line {}: {}", line, content);
            }
        }

        let groups = pending
            .into_iter()
            .map(|group| {
                HcfGroup::from_strokes(group.indices, &strokes)
                    .map_err(|e| stroke_error(group.line, e))
            })
            .collect::<Result<Vec<_>>>()?;

        for (line, overlap) in &overlaps {
            for index in [overlap.first, overlap.second] {
                if index >= strokes.len() {
                    return Err(hcf_error(
                        *line,
                        format!(
                            "Overlap refers to stroke {} but only {} strokes exist",
                            index + 1,
                            strokes.len()
                        ),
                    ));
                }
            }
        }

        let mut bounds = Rectangle::empty();
        for stroke in &strokes {
            bounds.union_rect(&stroke.bounds);
        }
        if strokes.is_empty() {
            bounds = Rectangle::new(0.0, 0.0, 0.0, 0.0);
        }

        let length = strokes.iter().map(|s| s.length).sum();
        let minimum_stroke_length = strokes
            .iter()
            .map(|s| s.length)
            .fold(None, |min: Option<f64>, l| Some(min.map_or(l, |m| m.min(l))))
            .unwrap_or(0.0);

        Ok(Self {
            unicode,
            bounds,
            length,
            minimum_stroke_length,
            strokes,
            groups,
            overlaps: overlaps.into_iter().map(|(_, overlap)| overlap).collect(),
        })
    }
}

impl std::str::FromStr for Hcf {
    type Err = StylusError;

    fn from_str(s: &str) -> Result<Self> {
        Hcf::parse(s)
    }
}

fn hcf_error(line: usize, reason: String) -> StylusError {
    StylusError::Hcf { line, reason }
}

fn stroke_error(line: usize, error: StylusError) -> StylusError {
    match error {
        StylusError::MalformedStroke(reason) => StylusError::Hcf { line, reason },
        other => other,
    }
}

fn parse_unicode(rest: &str) -> std::result::Result<String, String> {
    let id = rest.split(':').next().unwrap_or("").trim();
    if !(4..=5).contains(&id.len()) || !id.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("Invalid han code point {:?}", id));
    }
    Ok(id.to_ascii_uppercase())
}

/// Parse `(label)x,y:cx,y:...`
pub fn parse_stroke(rest: &str) -> Result<HcfStroke> {
    let rest = rest.trim();
    let (label, points) = rest
        .strip_prefix('(')
        .and_then(|r| r.split_once(')'))
        .filter(|(label, _)| !label.trim().is_empty())
        .ok_or_else(|| StylusError::MalformedStroke("Stroke is missing its (label)".to_string()))?;

    let points = points
        .split(':')
        .map(parse_point)
        .collect::<Result<Vec<_>>>()?;

    HcfStroke::from_points(label.trim(), &points)
}

fn parse_point(text: &str) -> Result<HcfPoint> {
    let text = text.trim();
    let (control, coords) = match text.strip_prefix('c') {
        Some(coords) => (true, coords),
        None => (false, text),
    };

    let malformed = || StylusError::MalformedStroke(format!("Invalid point {:?}", text));
    let (x, y) = coords.split_once(',').ok_or_else(malformed)?;
    let x = parse_coordinate(x).ok_or_else(malformed)?;
    let y = parse_coordinate(y).ok_or_else(malformed)?;

    Ok(if control {
        HcfPoint::control(x, y)
    } else {
        HcfPoint::plain(x, y)
    })
}

// Signed integers or decimals only; rejects inf/NaN spellings
fn parse_coordinate(text: &str) -> Option<f64> {
    let text = text.trim();
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

// 1-based on the wire, 0-based in memory
fn parse_index(text: &str) -> std::result::Result<usize, String> {
    match text.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(format!("Invalid stroke index {:?}", text.trim())),
    }
}

fn parse_indices(rest: &str) -> std::result::Result<Vec<usize>, String> {
    rest.split(',').map(parse_index).collect()
}

fn parse_overlap(rest: &str) -> std::result::Result<HcfOverlap, String> {
    let fields: Vec<&str> = rest.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(format!("Overlap needs two strokes and a flag, found {:?}", rest));
    }

    let required = match fields[2] {
        "0" => false,
        "1" => true,
        other => return Err(format!("Overlap flag must be 0 or 1, found {:?}", other)),
    };

    Ok(HcfOverlap {
        first: parse_index(fields[0])?,
        second: parse_index(fields[1])?,
        required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PointDistance;

    #[test]
    fn test_single_straight_stroke() {
        let hcf = Hcf::parse("stroke:(s1)0,0:10,0").unwrap();

        assert_eq!(hcf.strokes.len(), 1);
        let stroke = &hcf.strokes[0];
        assert_eq!(stroke.label, "s1");
        assert_eq!(
            stroke.forward,
            vec![PointDistance::new(0.0, 0.0, 0.0), PointDistance::new(10.0, 0.0, 1.0)]
        );
        assert_eq!(stroke.length, 10.0);
        assert_eq!(stroke.bounds, Rectangle::new(0.0, 0.0, 0.0, 10.0));
        assert_eq!(hcf.length, 10.0);
        assert_eq!(hcf.minimum_stroke_length, 10.0);
    }

    #[test]
    fn test_unicode_directive() {
        assert_eq!(Hcf::parse("han:4e00").unwrap().unicode, "4E00");
        assert_eq!(Hcf::parse("  han:20B9F:12:40  ").unwrap().unicode, "20B9F");
        assert!(matches!(Hcf::parse("han:4E"), Err(StylusError::Hcf { line: 1, .. })));
        assert!(matches!(Hcf::parse("han:XYZW"), Err(StylusError::Hcf { line: 1, .. })));
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(parse_coordinate("-12"), Some(-12.0));
        assert_eq!(parse_coordinate("+3.5"), Some(3.5));
        assert_eq!(parse_coordinate("inf"), None);
        assert_eq!(parse_coordinate("1e3"), None);
        assert_eq!(parse_coordinate(""), None);
    }

    #[test]
    fn test_stroke_errors_carry_line() {
        let text = "han:4E00\n\nstroke:(a)0,0:c5,5:10,0\nstroke:(b)0,0:c1,1\n";
        match Hcf::parse(text) {
            Err(StylusError::Hcf { line, reason }) => {
                assert_eq!(line, 4);
                assert!(reason.contains("end"), "{}", reason);
            }
            other => panic!("expected Hcf error, got {:?}", other),
        }

        assert!(matches!(Hcf::parse("stroke:0,0:1,1"), Err(StylusError::Hcf { line: 1, .. })));
        assert!(matches!(Hcf::parse("stroke:(a)0,0:x,1"), Err(StylusError::Hcf { line: 1, .. })));
        assert!(matches!(Hcf::parse("stroke:(a)0,0"), Err(StylusError::Hcf { line: 1, .. })));
    }

    #[test]
    fn test_groups_resolve_after_strokes() {
        let text = "group:1,2\nstroke:(a)0,0:10,0\nstroke:(b)0,10:30,10\n";
        let hcf = Hcf::parse(text).unwrap();
        assert_eq!(hcf.groups.len(), 1);
        assert_eq!(hcf.groups[0].strokes, vec![0, 1]);
        assert_eq!(hcf.groups[0].length, 40.0);

        assert!(matches!(
            Hcf::parse("stroke:(a)0,0:10,0\ngroup:1,3"),
            Err(StylusError::Hcf { line: 2, .. })
        ));
        assert!(matches!(
            Hcf::parse("stroke:(a)0,0:10,0\ngroup:0"),
            Err(StylusError::Hcf { line: 2, .. })
        ));
    }

    #[test]
    fn test_overlaps() {
        let text = "stroke:(a)0,0:10,0\nstroke:(b)5,-5:5,5\noverlap:1,2,1\noverlap:2,1,0";
        let hcf = Hcf::parse(text).unwrap();
        assert_eq!(
            hcf.overlaps,
            vec![
                HcfOverlap { first: 0, second: 1, required: true },
                HcfOverlap { first: 1, second: 0, required: false },
            ]
        );

        assert!(Hcf::parse("stroke:(a)0,0:10,0\noverlap:1,2,1").is_err());
        assert!(Hcf::parse("stroke:(a)0,0:10,0\noverlap:1,1,2").is_err());
    }

    #[test]
    fn test_unknown_lines_are_ignored() {
        let hcf = Hcf::parse("# comment\nwidth:12\nstroke:(a)0,0:0,5\n").unwrap();
        assert_eq!(hcf.strokes.len(), 1);
        assert_eq!(hcf.unicode, "");
    }

    #[test]
    fn test_empty_glyph() {
        let hcf = Hcf::parse("").unwrap();
        assert_eq!(hcf.minimum_stroke_length, 0.0);
        assert_eq!(hcf.length, 0.0);
        assert_eq!(hcf.bounds, Rectangle::new(0.0, 0.0, 0.0, 0.0));
    }
}
