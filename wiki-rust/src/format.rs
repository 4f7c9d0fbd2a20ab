use crate::{DataItem, WikiEntry, WikiModule};
use std::fmt::Write;

/// Flatten an entry into the plain text layout downstream consumers expect:
///
/// ```text
/// Name: <name>
/// Description: <description>
///
/// <module>
/// - <key>: <value>
/// - <value>
///
/// ```
///
/// The description block is left out when empty, and so is every module
/// without data. Modules and rows keep their original order.
#[must_use]
pub fn format_entry(entry: &WikiEntry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name: {}", entry.name);

    if !entry.content.description.is_empty() {
        let _ = write!(out, "Description: {}\n\n", entry.content.description);
    }

    for module in &entry.content.modules {
        write_module(&mut out, module);
    }

    out
}

fn write_module(out: &mut String, module: &WikiModule) {
    if module.data.is_empty() {
        return;
    }
    out.push_str(&module.name);
    out.push('\n');
    for item in &module.data {
        write_item(out, item);
    }
    out.push('\n');
}

fn write_item(out: &mut String, item: &DataItem) {
    if item.key.is_empty() {
        let _ = writeln!(out, "- {}", item.value);
    } else {
        let _ = writeln!(out, "- {}: {}", item.key, item.value);
    }
}
