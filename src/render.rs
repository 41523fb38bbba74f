//! Renders a resolved type set as Go-style struct definitions.
use crate::error::{DocError, Result};
use crate::ir::{Member, TypeDef};
use crate::resolve::ResolvedSet;

const INDENT: &str = "\t";
const COMMENT_MARKER: &str = "//";

/// Render every entry of `set`, in set order, separated by a blank line.
pub fn render(set: &ResolvedSet) -> Result<String> {
    let mut blocks = Vec::with_capacity(set.len());
    for (name, ty) in set {
        let block = render_type(ty).map_err(|e| DocError::render(name.as_str(), e))?;
        blocks.push(block);
    }
    Ok(blocks.join("\n\n"))
}

pub fn render_type(ty: &TypeDef) -> Result<String> {
    let TypeDef::Struct { name, members } = ty else {
        return Err(DocError::UnsupportedTypeKind { name: ty.name().to_string(), kind: ty.kind() });
    };
    if name.is_empty() {
        return Err(DocError::MalformedType {
            name: name.clone(),
            reason: "struct has no name".into(),
        });
    }

    let mut out = String::new();
    out.push_str(&format!("type {} struct {{\n", title(name)));
    for member in members {
        if member.ty.name().is_empty() {
            return Err(DocError::MalformedType {
                name: name.clone(),
                reason: format!("member `{}` has an unnamed type", member.name),
            });
        }
        out.push_str(INDENT);
        out.push_str(&member_line(member));
        out.push('\n');
    }
    out.push('}');
    Ok(out)
}

/// `Name type tag // comment`; empty parts are left out.
fn member_line(member: &Member) -> String {
    let comment = member.comment.as_deref().and_then(normalize_comment);
    let name = title(&member.name);
    [name.as_str(), member.ty.name(), member.tag.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .chain(comment)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"// user id"`, `"//user id"` and `" user id"` all become `"// user id"`.
pub fn normalize_comment(raw: &str) -> Option<String> {
    let text = raw.trim().trim_start_matches('/').trim();
    (!text.is_empty()).then(|| format!("{COMMENT_MARKER} {text}"))
}

/// Exported-identifier spelling: first character upper-cased.
pub fn title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
