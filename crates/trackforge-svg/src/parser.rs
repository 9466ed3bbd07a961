//! SVG path element extraction.

use lyon::math::point;
use lyon::path::Path;
use regex::Regex;
use tracing::debug;
use trackforge_core::{ParseError, ParseResult};

/// Extracts every `<path>` element of the document as a `lyon` path, in
/// document order. Paths without drawable data are dropped.
pub fn extract_paths(svg: &str) -> ParseResult<Vec<Path>> {
    let re_path = Regex::new(r#"<path\s+([^>]+)>"#).expect("invalid path regex");
    let re_d = Regex::new(r#"d\s*=\s*["']([^"']+)["']"#).expect("invalid d regex");

    let mut found_element = false;
    let mut paths = Vec::new();

    for cap in re_path.captures_iter(svg) {
        found_element = true;
        if let Some(d_cap) = re_d.captures(&cap[1]) {
            if let Some(path) = build_path(&d_cap[1]) {
                paths.push(path);
            }
        }
    }

    if !found_element {
        return Err(ParseError::NoPaths);
    }
    if paths.is_empty() {
        return Err(ParseError::EmptyPath);
    }
    debug!("Extracted {} path(s) from SVG document", paths.len());
    Ok(paths)
}

/// Returns the first path of the document: the track centerline.
pub fn first_path(svg: &str) -> ParseResult<Path> {
    let mut paths = extract_paths(svg)?;
    Ok(paths.remove(0))
}

/// Splits path data into command and number tokens.
pub fn tokenize_path_data(data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in data.chars() {
        match ch {
            'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' | 'C' | 'c' | 'S' | 's' | 'Q' | 'q'
            | 'T' | 't' | 'A' | 'a' | 'Z' | 'z' => {
                if !current.is_empty() {
                    tokens.push(current.clone());
                    current.clear();
                }
                tokens.push(ch.to_string());
            }
            ' ' | ',' | '\n' | '\r' | '\t' => {
                if !current.is_empty() {
                    tokens.push(current.clone());
                    current.clear();
                }
            }
            '-' => {
                // A minus sign starts a new number unless it follows an
                // exponent marker.
                if !current.is_empty() && !current.ends_with('e') && !current.ends_with('E') {
                    tokens.push(current.clone());
                    current.clear();
                }
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn is_number(token: &str) -> bool {
    token.parse::<f32>().is_ok()
}

fn num(token: &str) -> f32 {
    token.parse().unwrap_or(0.0)
}

/// Builds a `lyon` path from SVG path data. Returns `None` when the
/// data contains no drawable command.
fn build_path(data: &str) -> Option<Path> {
    let tokens = tokenize_path_data(data);
    let mut builder = Path::builder();

    let mut current_x = 0.0f32;
    let mut current_y = 0.0f32;
    let mut start_x = 0.0f32;
    let mut start_y = 0.0f32;
    let mut subpath_active = false;
    let mut has_drawables = false;

    fn begin_if_needed(builder: &mut lyon::path::path::Builder, active: &mut bool, x: f32, y: f32) {
        if !*active {
            builder.begin(point(x, y));
            *active = true;
        }
    }

    let mut i = 0;
    while i < tokens.len() {
        let cmd = tokens[i].as_str();
        match cmd {
            "M" | "m" => {
                if i + 2 < tokens.len() {
                    let x = num(&tokens[i + 1]);
                    let y = num(&tokens[i + 2]);
                    if cmd == "m" {
                        current_x += x;
                        current_y += y;
                    } else {
                        current_x = x;
                        current_y = y;
                    }
                    if subpath_active {
                        builder.end(false);
                        subpath_active = false;
                    }
                    start_x = current_x;
                    start_y = current_y;
                    builder.begin(point(current_x, current_y));
                    subpath_active = true;
                    i += 3;
                } else {
                    i += 1;
                }
            }
            "L" | "l" => {
                begin_if_needed(&mut builder, &mut subpath_active, current_x, current_y);
                let mut j = i + 1;
                while tokens.len() > j + 1 && is_number(&tokens[j]) && is_number(&tokens[j + 1]) {
                    let x = num(&tokens[j]);
                    let y = num(&tokens[j + 1]);
                    if cmd == "l" {
                        current_x += x;
                        current_y += y;
                    } else {
                        current_x = x;
                        current_y = y;
                    }
                    builder.line_to(point(current_x, current_y));
                    has_drawables = true;
                    j += 2;
                }
                i = j.max(i + 1);
            }
            "H" | "h" => {
                begin_if_needed(&mut builder, &mut subpath_active, current_x, current_y);
                if i + 1 < tokens.len() && is_number(&tokens[i + 1]) {
                    let x = num(&tokens[i + 1]);
                    current_x = if cmd == "h" { current_x + x } else { x };
                    builder.line_to(point(current_x, current_y));
                    has_drawables = true;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            "V" | "v" => {
                begin_if_needed(&mut builder, &mut subpath_active, current_x, current_y);
                if i + 1 < tokens.len() && is_number(&tokens[i + 1]) {
                    let y = num(&tokens[i + 1]);
                    current_y = if cmd == "v" { current_y + y } else { y };
                    builder.line_to(point(current_x, current_y));
                    has_drawables = true;
                    i += 2;
                } else {
                    i += 1;
                }
            }
            "C" | "c" => {
                begin_if_needed(&mut builder, &mut subpath_active, current_x, current_y);
                let mut j = i + 1;
                while tokens.len() > j + 5 && (j..=j + 5).all(|k| is_number(&tokens[k])) {
                    let (relx, rely) = if cmd == "c" {
                        (current_x, current_y)
                    } else {
                        (0.0, 0.0)
                    };
                    let c1 = point(relx + num(&tokens[j]), rely + num(&tokens[j + 1]));
                    let c2 = point(relx + num(&tokens[j + 2]), rely + num(&tokens[j + 3]));
                    let end = point(relx + num(&tokens[j + 4]), rely + num(&tokens[j + 5]));
                    builder.cubic_bezier_to(c1, c2, end);
                    has_drawables = true;
                    current_x = end.x;
                    current_y = end.y;
                    j += 6;
                }
                i = j.max(i + 1);
            }
            "Q" | "q" => {
                begin_if_needed(&mut builder, &mut subpath_active, current_x, current_y);
                let mut j = i + 1;
                while tokens.len() > j + 3 && (j..=j + 3).all(|k| is_number(&tokens[k])) {
                    let (relx, rely) = if cmd == "q" {
                        (current_x, current_y)
                    } else {
                        (0.0, 0.0)
                    };
                    let ctrl = point(relx + num(&tokens[j]), rely + num(&tokens[j + 1]));
                    let end = point(relx + num(&tokens[j + 2]), rely + num(&tokens[j + 3]));
                    builder.quadratic_bezier_to(ctrl, end);
                    has_drawables = true;
                    current_x = end.x;
                    current_y = end.y;
                    j += 4;
                }
                i = j.max(i + 1);
            }
            "Z" | "z" => {
                if subpath_active {
                    builder.end(true);
                    subpath_active = false;
                    has_drawables = true;
                    current_x = start_x;
                    current_y = start_y;
                }
                i += 1;
            }
            _ => {
                // Unsupported command (S/T/A) or stray token.
                i += 1;
            }
        }
    }

    if subpath_active {
        builder.end(false);
    }

    if has_drawables {
        Some(builder.build())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::path::Event;

    const SAMPLE_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="400" height="300" xmlns="http://www.w3.org/2000/svg">
    <path d="M 50 150 Q 100 50 200 100 Q 300 150 350 100 Q 380 80 350 200 Q 300 250 200 200 Q 100 250 50 150 Z"
          stroke="black" stroke-width="2" fill="none"/>
</svg>"#;

    #[test]
    fn test_tokenizer() {
        let tokens = tokenize_path_data("M 10,20 L-5 3.5z");
        assert_eq!(tokens, vec!["M", "10", "20", "L", "-5", "3.5", "z"]);
    }

    #[test]
    fn test_tokenizer_negative_exponent() {
        let tokens = tokenize_path_data("L 1e-3 -2");
        assert_eq!(tokens, vec!["L", "1e-3", "-2"]);
    }

    #[test]
    fn test_sample_track_parses() {
        let paths = extract_paths(SAMPLE_SVG).unwrap();
        assert_eq!(paths.len(), 1);

        let mut quadratics = 0;
        let mut closed = false;
        for event in paths[0].iter() {
            match event {
                Event::Quadratic { .. } => quadratics += 1,
                Event::End { close, .. } => closed = close,
                _ => {}
            }
        }
        assert_eq!(quadratics, 5);
        assert!(closed);
    }

    #[test]
    fn test_first_path_of_multi_path_document() {
        let svg = r#"<svg><path d="M 0 0 L 10 0"/><path d="M 5 5 L 6 6"/></svg>"#;
        let path = first_path(svg).unwrap();
        let mut endpoints = Vec::new();
        for event in path.iter() {
            if let Event::Line { to, .. } = event {
                endpoints.push((to.x, to.y));
            }
        }
        assert_eq!(endpoints, vec![(10.0, 0.0)]);
    }

    #[test]
    fn test_relative_commands() {
        let path = build_path("M 10 10 l 10 0 v 5 h -5").unwrap();
        let mut last = None;
        for event in path.iter() {
            if let Event::Line { to, .. } = event {
                last = Some((to.x, to.y));
            }
        }
        assert_eq!(last, Some((15.0, 15.0)));
    }

    #[test]
    fn test_cubic_command() {
        let path = build_path("M 0 0 C 10 0 20 10 30 10").unwrap();
        let mut cubics = 0;
        for event in path.iter() {
            if let Event::Cubic { ctrl1, to, .. } = event {
                cubics += 1;
                assert_eq!((ctrl1.x, ctrl1.y), (10.0, 0.0));
                assert_eq!((to.x, to.y), (30.0, 10.0));
            }
        }
        assert_eq!(cubics, 1);
    }

    #[test]
    fn test_no_path_elements() {
        let svg = r#"<svg><circle cx="5" cy="5" r="4"/></svg>"#;
        assert!(matches!(extract_paths(svg), Err(ParseError::NoPaths)));
    }

    #[test]
    fn test_move_only_path_is_empty() {
        let svg = r#"<svg><path d="M 10 10"/></svg>"#;
        assert!(matches!(extract_paths(svg), Err(ParseError::EmptyPath)));
    }
}
