//! CTL file name and header parsing.
//!
//! *aces-dev* encodes the nature of a transform in its file name, e.g.
//! `ODT.Academy.Rec709_100nits_dim.a1.0.3.ctl` is the Academy Rec.709 output
//! device transform at version `a1.0.3`. Classification splits the name into
//! a type token, an optional vendor and the transform name proper, derives
//! the colorspace conversion the transform implements, and pairs the result
//! with the metadata tags found in the leading comment block of the file.

use std::fs;
use std::path::Path;

use crate::error::{CtlError, CtlResult};
use crate::family::TransformFamily;
use crate::transform::CtlTransform;
use crate::{OUTPUT_ENCODING_COLORSPACE, REFERENCE_COLORSPACE, UNDEFINED_GENUS};

/// Classify a single `.ctl` file.
///
/// `root` is the transform tree root the file was discovered under; the
/// family and genus are derived from the path relative to it. The file is
/// read to extract the `ACEStransformID` and `ACESuserName` tags and the
/// description comment block.
///
/// # Errors
///
/// Returns [`CtlError::UnknownFamily`] when the file does not sit under a
/// recognized family directory, and [`CtlError::Io`] when it cannot be read.
pub fn classify_ctl_transform(path: &Path, root: &Path) -> CtlResult<CtlTransform> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let (family, genus) = classify_family_genus(relative).ok_or_else(|| CtlError::UnknownFamily {
        path: path.to_path_buf(),
    })?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| CtlError::UnknownFamily {
            path: path.to_path_buf(),
        })?;

    let parts = parse_stem(&stem);
    let name = vendor_qualified(&parts.name, parts.vendor.as_deref());
    let (source, target) = conversion_endpoints(&parts.type_token, &parts.name, &name);

    let content = fs::read_to_string(path)?;
    let header = parse_ctl_header(&content);

    let mut builder = CtlTransform::builder(name, family)
        .path(path)
        .genus(genus)
        .description(header.description);
    if let Some(source) = source {
        builder = builder.source(source);
    }
    if let Some(target) = target {
        builder = builder.target(target);
    }
    if let Some(id) = header.aces_transform_id {
        builder = builder.aces_transform_id(id);
    }
    if let Some(user_name) = header.user_name {
        builder = builder.user_name(user_name);
    }
    Ok(builder.build())
}

/// Family and genus from a path relative to the transform tree root.
///
/// The first component names the family, the intermediate directories form
/// the genus. `odt/rec709/ODT.…ctl` has family `output` and genus `rec709`,
/// `lmt/LMT.…ctl` has family `look` and genus `undefined`.
fn classify_family_genus(relative: &Path) -> Option<(TransformFamily, String)> {
    let components: Vec<&str> = relative.iter().filter_map(|c| c.to_str()).collect();
    if components.len() < 2 {
        return None;
    }
    let family = TransformFamily::parse(components[0])?;
    let genus = if components.len() > 2 {
        components[1..components.len() - 1].join("/")
    } else {
        UNDEFINED_GENUS.to_string()
    };
    Some((family, genus))
}

/// Pieces of a CTL file stem.
struct StemParts {
    type_token: String,
    vendor: Option<String>,
    name: String,
}

/// Split a file stem into type token, vendor and name.
///
/// Trailing version tokens (`a1`, `v2`, bare numbers) are dropped. A stem
/// that is all type and version, such as `RRT.a1.0.3`, keeps the type token
/// as its name.
fn parse_stem(stem: &str) -> StemParts {
    let tokens: Vec<&str> = stem.split('.').collect();
    let type_token = tokens[0].to_string();

    let mut rest = &tokens[1..];
    while let Some((last, head)) = rest.split_last() {
        if !is_version_token(last) {
            break;
        }
        rest = head;
    }

    let (vendor, name) = match rest {
        [] => (None, type_token.clone()),
        [name] => (None, (*name).to_string()),
        [vendor, name @ ..] => (Some((*vendor).to_string()), name.join(".")),
    };
    StemParts {
        type_token,
        vendor,
        name,
    }
}

/// Whether a stem token is part of a version suffix.
fn is_version_token(token: &str) -> bool {
    let rest = token.strip_prefix(['a', 'v']).unwrap_or(token);
    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
}

/// Prefix a transform name with its vendor, unless the vendor is the Academy.
fn vendor_qualified(name: &str, vendor: Option<&str>) -> String {
    match vendor {
        Some(vendor) if !vendor.eq_ignore_ascii_case("academy") => format!("{vendor}_{name}"),
        _ => name.to_string(),
    }
}

/// Conversion endpoints implied by the stem type token.
///
/// `raw_name` is the name without vendor qualification, `name` with it.
/// Colorspace conversion transforms encode both endpoints in their own name;
/// the directional types pin one endpoint to a reference colorspace.
fn conversion_endpoints(
    type_token: &str,
    raw_name: &str,
    name: &str,
) -> (Option<String>, Option<String>) {
    let reference = || REFERENCE_COLORSPACE.to_string();
    let encoding = || OUTPUT_ENCODING_COLORSPACE.to_string();
    let named = || name.to_string();
    match type_token {
        "ACEScsc" => match raw_name.split_once("_to_") {
            Some((source, target)) => (
                Some(csc_colorspace(source)),
                Some(csc_colorspace(target)),
            ),
            None => (None, None),
        },
        "IDT" => (Some(named()), Some(reference())),
        "LMT" => (Some(reference()), Some(named())),
        "InvLMT" => (Some(named()), Some(reference())),
        "ODT" => (Some(encoding()), Some(named())),
        "InvODT" => (Some(named()), Some(encoding())),
        "RRT" => (Some(reference()), Some(encoding())),
        "InvRRT" => (Some(encoding()), Some(reference())),
        "RRTODT" => (Some(reference()), Some(named())),
        "InvRRTODT" => (Some(named()), Some(reference())),
        _ => (None, None),
    }
}

/// Map the `ACES` shorthand used in conversion names to the reference name.
fn csc_colorspace(name: &str) -> String {
    if name == "ACES" {
        REFERENCE_COLORSPACE.to_string()
    } else {
        name.to_string()
    }
}

/// Metadata extracted from the leading comment block of a CTL file.
pub(crate) struct CtlHeader {
    pub(crate) aces_transform_id: Option<String>,
    pub(crate) user_name: Option<String>,
    pub(crate) description: String,
}

/// Parse the leading comment block of a CTL file.
///
/// Scanning stops at the first line that is neither blank nor a `//`
/// comment. Tag lines contribute metadata, the remaining comment text forms
/// the description with surrounding blank lines trimmed.
pub(crate) fn parse_ctl_header(content: &str) -> CtlHeader {
    let mut aces_transform_id = None;
    let mut user_name = None;
    let mut lines: Vec<&str> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            lines.push("");
            continue;
        }
        let Some(rest) = trimmed.strip_prefix("//") else {
            break;
        };
        let text = rest.strip_prefix(' ').unwrap_or(rest).trim_end();
        if let Some(id) = extract_tag(text, "ACEStransformID") {
            aces_transform_id = Some(id);
        } else if let Some(name) = extract_tag(text, "ACESuserName") {
            user_name = Some(name);
        } else {
            lines.push(text);
        }
    }

    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    CtlHeader {
        aces_transform_id,
        user_name,
        description: lines.join("\n"),
    }
}

/// Extract the content of an XML-ish `<Tag>…</Tag>` pair from a line.
fn extract_tag(text: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = text.find(&open)? + open.len();
    let end = text[start..].find(&close)? + start;
    Some(text[start..end].trim().to_string())
}
