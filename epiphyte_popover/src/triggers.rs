// Copyright 2025 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger specification parsing and event-to-action resolution.
//!
//! ## Grammar
//!
//! A specification is a whitespace-separated token list. A bare event name
//! toggles on that event; `open:close` opens on the first event and closes
//! on the second. Two aliases expand before pairing: `hover` ⇒
//! `mouseenter:mouseleave` and `focus` ⇒ `focusin:focusout`. The single
//! token `manual` produces an empty set: the host drives open/close through
//! the API only.
//!
//! Parsing never fails: malformed tokens are skipped so a partially valid
//! configuration keeps its valid parts, and an empty or fully malformed
//! specification falls back to a `click` toggle.
//!
//! ```
//! use epiphyte_popover::triggers::{TriggerAction, TriggerSpec};
//!
//! let spec = TriggerSpec::parse("hover focus");
//! assert_eq!(spec.action_for("mouseenter"), Some(TriggerAction::Open));
//! assert_eq!(spec.action_for("focusout"), Some(TriggerAction::Close));
//! assert_eq!(spec.action_for("click"), None);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

/// One parsed trigger: an opening event and, for paired triggers, a closing
/// event. `close == None` marks a toggle trigger.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TriggerPair {
    /// Event that opens (or toggles, when `close` is `None`).
    pub open: String,
    /// Event that closes, for `open:close` tokens.
    pub close: Option<String>,
}

/// The semantic action a trigger event maps to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TriggerAction {
    /// Request the popover to open.
    Open,
    /// Request the popover to close.
    Close,
    /// Open when closed, close when open.
    Toggle,
}

/// An immutable, ordered set of trigger pairs.
///
/// Built once from a configuration string when the popover attaches. Every
/// configured event maps to exactly one action: when several pairs mention
/// the same event name, the earliest pair wins.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TriggerSpec {
    pairs: Vec<TriggerPair>,
}

impl TriggerSpec {
    /// Parse a trigger specification string.
    ///
    /// Empty and fully malformed input falls back to a `click` toggle; the
    /// lone token `manual` yields an empty set instead.
    pub fn parse(spec: &str) -> Self {
        let tokens: Vec<&str> = spec.split_whitespace().collect();
        if tokens == ["manual"] {
            return Self { pairs: Vec::new() };
        }
        let mut pairs: Vec<TriggerPair> = tokens.iter().filter_map(|t| parse_token(t)).collect();
        if pairs.is_empty() {
            pairs.push(TriggerPair {
                open: String::from("click"),
                close: None,
            });
        }
        Self { pairs }
    }

    /// True when the host drives open/close exclusively through the API
    /// (the `manual` specification).
    pub fn is_manual(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The parsed pairs, in configuration order.
    pub fn pairs(&self) -> &[TriggerPair] {
        &self.pairs
    }

    /// Event names the host should listen for on the anchor, deduplicated,
    /// in configuration order.
    pub fn listen_events(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for pair in &self.pairs {
            if !out.contains(&pair.open.as_str()) {
                out.push(&pair.open);
            }
            if let Some(close) = &pair.close
                && !out.contains(&close.as_str())
            {
                out.push(close);
            }
        }
        out
    }

    /// Resolve an incoming event name to its action, if any trigger claims
    /// it. The earliest claiming pair wins.
    pub fn action_for(&self, event: &str) -> Option<TriggerAction> {
        for pair in &self.pairs {
            match &pair.close {
                None => {
                    if pair.open == event {
                        return Some(TriggerAction::Toggle);
                    }
                }
                Some(close) => {
                    if pair.open == event {
                        return Some(TriggerAction::Open);
                    }
                    if close == event {
                        return Some(TriggerAction::Close);
                    }
                }
            }
        }
        None
    }
}

/// Parse one token. Aliases expand here; anything with an empty part or a
/// second separator is malformed and skipped. `manual` mixed among other
/// tokens is skipped like any unknown form.
fn parse_token(token: &str) -> Option<TriggerPair> {
    match token {
        "manual" => None,
        "hover" => Some(TriggerPair {
            open: String::from("mouseenter"),
            close: Some(String::from("mouseleave")),
        }),
        "focus" => Some(TriggerPair {
            open: String::from("focusin"),
            close: Some(String::from("focusout")),
        }),
        _ => {
            let mut parts = token.split(':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(open), None, _) if !open.is_empty() => Some(TriggerPair {
                    open: String::from(open),
                    close: None,
                }),
                (Some(open), Some(close), None) if !open.is_empty() && !close.is_empty() => {
                    Some(TriggerPair {
                        open: String::from(open),
                        close: Some(String::from(close)),
                    })
                }
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn pair(open: &str, close: Option<&str>) -> TriggerPair {
        TriggerPair {
            open: String::from(open),
            close: close.map(String::from),
        }
    }

    #[test]
    fn bare_event_is_a_toggle() {
        let spec = TriggerSpec::parse("click");
        assert_eq!(spec.pairs(), &[pair("click", None)]);
        assert_eq!(spec.action_for("click"), Some(TriggerAction::Toggle));
    }

    #[test]
    fn paired_token_opens_and_closes() {
        let spec = TriggerSpec::parse("mouseenter:mouseleave");
        assert_eq!(spec.action_for("mouseenter"), Some(TriggerAction::Open));
        assert_eq!(spec.action_for("mouseleave"), Some(TriggerAction::Close));
    }

    #[test]
    fn aliases_expand_to_event_pairs() {
        let spec = TriggerSpec::parse("hover focus");
        assert_eq!(
            spec.pairs(),
            &[
                pair("mouseenter", Some("mouseleave")),
                pair("focusin", Some("focusout")),
            ]
        );
    }

    #[test]
    fn empty_spec_falls_back_to_click() {
        assert_eq!(TriggerSpec::parse("").pairs(), &[pair("click", None)]);
        assert_eq!(TriggerSpec::parse("   ").pairs(), &[pair("click", None)]);
    }

    // Malformed tokens are skipped; valid parts of the configuration are kept.
    #[test]
    fn malformed_tokens_are_skipped_not_fatal() {
        let spec = TriggerSpec::parse("click a:b:c :x y: hover");
        assert_eq!(
            spec.pairs(),
            &[pair("click", None), pair("mouseenter", Some("mouseleave"))]
        );
    }

    #[test]
    fn fully_malformed_spec_falls_back_to_click() {
        assert_eq!(
            TriggerSpec::parse("a:b:c :: :").pairs(),
            &[pair("click", None)]
        );
    }

    #[test]
    fn manual_alone_disables_listeners() {
        let spec = TriggerSpec::parse("manual");
        assert!(spec.is_manual());
        assert!(spec.listen_events().is_empty());
        assert_eq!(spec.action_for("click"), None);
    }

    #[test]
    fn manual_mixed_with_other_tokens_is_skipped() {
        let spec = TriggerSpec::parse("manual click");
        assert!(!spec.is_manual());
        assert_eq!(spec.pairs(), &[pair("click", None)]);
    }

    #[test]
    fn listen_events_deduplicates_in_order() {
        let spec = TriggerSpec::parse("hover mouseenter:click click");
        assert_eq!(
            spec.listen_events(),
            vec!["mouseenter", "mouseleave", "click"]
        );
    }

    // The earliest pair claiming an event wins, so each event has exactly
    // one action.
    #[test]
    fn earliest_claim_wins_on_duplicate_events() {
        let spec = TriggerSpec::parse("click click:blur");
        assert_eq!(spec.action_for("click"), Some(TriggerAction::Toggle));
        assert_eq!(spec.action_for("blur"), Some(TriggerAction::Close));
    }
}
