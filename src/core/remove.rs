//! Stripping a retired feature's strings from locale files.
//!
//! Each [`RemovalRule`] names one locale file and the key paths to drop from
//! it. [`BROWSER_RULES`] covers the browser tool, which no longer ships in the
//! webview; its labels are spread over four files per locale.

use serde_json::{Map, Value};

use super::key_path;

/// Key paths to remove from one locale file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalRule {
    /// File name inside each locale directory.
    pub file_name: &'static str,
    /// Dotted key paths, relative to the document root.
    pub key_paths: &'static [&'static str],
}

impl RemovalRule {
    /// Remove every key path of this rule from `doc`.
    ///
    /// Returns the key paths that were actually present. Paths that are
    /// missing, or that run through a non-object value, are skipped.
    pub fn apply(&self, doc: &mut Map<String, Value>) -> Vec<&'static str> {
        self.key_paths
            .iter()
            .copied()
            .filter(|path| key_path::remove(doc, path).is_some())
            .collect()
    }
}

pub const BROWSER_RULES: &[RemovalRule] = &[
    RemovalRule {
        file_name: "settings.json",
        key_paths: &[
            "sections.browser",
            "autoApprove.browser",
            "browser",
            "providers.customModel.computerUse",
        ],
    },
    RemovalRule {
        file_name: "kilocode.json",
        key_paths: &[
            "notifications.browserAction",
            "taskTimeline.tooltip.messageTypes.browser_action",
            "taskTimeline.tooltip.messageTypes.browser_action_result",
            "taskTimeline.tooltip.messageTypes.browser_action_launch",
        ],
    },
    RemovalRule {
        file_name: "chat.json",
        key_paths: &[
            "browser",
            "browserAnnouncement",
            "browserAnnouncementDesc",
            "browserSession",
            "browserActionPress",
            "browserActionPressDesc",
            "browserActionHover",
            "browserActionHoverDesc",
            "browserUse",
        ],
    },
    RemovalRule {
        file_name: "prompts.json",
        key_paths: &["tools.toolNames.browser"],
    },
];
