//! Hover information for identifiers in a formula line.

use super::text_utils::identifier_at;
use crate::base::TextRegion;
use crate::identifier::{IdentifierNode, IdentifierParser, Message, NodeKind};
use crate::model::Datatype;

/// Result of a hover request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    /// The hover content (markdown).
    pub contents: String,
    /// Region of the hovered part within the line.
    pub region: TextRegion,
    /// Type of the identifier prefix ending at the hovered part.
    pub datatype: Option<Datatype>,
    /// Set when the hovered part does not resolve.
    pub message: Option<Message>,
}

/// Describe the identifier part under `offset`.
///
/// Parses the whole identifier around `offset` and reports the node whose
/// region contains it. Parts after the first invalid one have no node, so
/// hovering them reports the invalid node.
pub fn hover(parser: &IdentifierParser<'_>, line: &str, offset: usize) -> Option<HoverResult> {
    let (start, identifier) = identifier_at(line, offset)?;
    let chain = parser.parse(identifier);
    let relative = offset - start;
    let node = chain
        .iter()
        .find(|node| node.text_region.contains(relative) || node.text_region.end() == relative)
        .unwrap_or_else(|| chain.last());

    let message = match &node.kind {
        NodeKind::Invalid(message) => Some(message.clone()),
        _ => None,
    };
    Some(HoverResult {
        contents: contents(node),
        region: node.text_region.offset(start),
        datatype: node.datatype.clone(),
        message,
    })
}

fn contents(node: &IdentifierNode) -> String {
    let subject = match &node.kind {
        NodeKind::Parameter(parameter) => format!("parameter **{}**", parameter.name),
        NodeKind::Attribute {
            attribute,
            default_value_access,
        } => {
            let access = if *default_value_access {
                "default value of "
            } else {
                ""
            };
            let (owner, name) = (&attribute.owner, &attribute.name);
            format!("{access}attribute **{owner}.{name}**")
        }
        NodeKind::Association(association) => {
            format!("association **{}.{}**", association.owner, association.name)
        }
        NodeKind::Qualifier {
            qualifier,
            runtime_id,
            ..
        } => format!("qualifier **{qualifier}** (`{runtime_id}`)"),
        NodeKind::Index(index) => format!("element **{index}**"),
        NodeKind::EnumClass(enum_type) => format!("enumeration **{}**", enum_type.name),
        NodeKind::EnumValue { enum_type, value } => {
            format!("value **{}.{}** ({})", enum_type.name, value.id, value.name)
        }
        NodeKind::Empty => return String::new(),
        NodeKind::Invalid(message) => return message.to_string(),
    };
    match &node.datatype {
        Some(datatype) => format!("{subject}: `{datatype}`"),
        None => subject,
    }
}
