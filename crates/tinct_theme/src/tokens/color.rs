//! Color tokens for theming

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tinct_core::{parse_any, ColorToken, Oklch};
use tracing::warn;

/// Semantic color roles
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRole {
    // Surfaces
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,

    // Brand colors
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,

    // Status colors
    Destructive,
    DestructiveForeground,
    Warning,
    WarningForeground,
    Success,
    SuccessForeground,

    // Borders and focus
    Border,
    Input,
    Ring,

    // Data visualisation
    #[serde(rename = "chart-1")]
    Chart1,
    #[serde(rename = "chart-2")]
    Chart2,
    #[serde(rename = "chart-3")]
    Chart3,
    #[serde(rename = "chart-4")]
    Chart4,
    #[serde(rename = "chart-5")]
    Chart5,

    // Sidebar
    Sidebar,
    SidebarForeground,
    SidebarPrimary,
    SidebarPrimaryForeground,
    SidebarAccent,
    SidebarAccentForeground,
    SidebarBorder,
    SidebarRing,

    // Scrollbar
    ScrollbarTrack,
    ScrollbarThumb,
}

impl ColorRole {
    pub const ALL: [ColorRole; 38] = [
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Card,
        ColorRole::CardForeground,
        ColorRole::Popover,
        ColorRole::PopoverForeground,
        ColorRole::Primary,
        ColorRole::PrimaryForeground,
        ColorRole::Secondary,
        ColorRole::SecondaryForeground,
        ColorRole::Muted,
        ColorRole::MutedForeground,
        ColorRole::Accent,
        ColorRole::AccentForeground,
        ColorRole::Destructive,
        ColorRole::DestructiveForeground,
        ColorRole::Warning,
        ColorRole::WarningForeground,
        ColorRole::Success,
        ColorRole::SuccessForeground,
        ColorRole::Border,
        ColorRole::Input,
        ColorRole::Ring,
        ColorRole::Chart1,
        ColorRole::Chart2,
        ColorRole::Chart3,
        ColorRole::Chart4,
        ColorRole::Chart5,
        ColorRole::Sidebar,
        ColorRole::SidebarForeground,
        ColorRole::SidebarPrimary,
        ColorRole::SidebarPrimaryForeground,
        ColorRole::SidebarAccent,
        ColorRole::SidebarAccentForeground,
        ColorRole::SidebarBorder,
        ColorRole::SidebarRing,
        ColorRole::ScrollbarTrack,
        ColorRole::ScrollbarThumb,
    ];

    /// Roles written by the scrollbar-only sync path
    pub const SCROLLBAR: [ColorRole; 2] = [ColorRole::ScrollbarTrack, ColorRole::ScrollbarThumb];

    /// Stable kebab-case key, also the token name
    pub fn key(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "card-foreground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popover-foreground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructive-foreground",
            Self::Warning => "warning",
            Self::WarningForeground => "warning-foreground",
            Self::Success => "success",
            Self::SuccessForeground => "success-foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
            Self::Chart1 => "chart-1",
            Self::Chart2 => "chart-2",
            Self::Chart3 => "chart-3",
            Self::Chart4 => "chart-4",
            Self::Chart5 => "chart-5",
            Self::Sidebar => "sidebar",
            Self::SidebarForeground => "sidebar-foreground",
            Self::SidebarPrimary => "sidebar-primary",
            Self::SidebarPrimaryForeground => "sidebar-primary-foreground",
            Self::SidebarAccent => "sidebar-accent",
            Self::SidebarAccentForeground => "sidebar-accent-foreground",
            Self::SidebarBorder => "sidebar-border",
            Self::SidebarRing => "sidebar-ring",
            Self::ScrollbarTrack => "scrollbar-track",
            Self::ScrollbarThumb => "scrollbar-thumb",
        }
    }

    /// Style property this role is bound to
    pub fn property(self) -> String {
        format!("--{}", self.key())
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorRole::ALL
            .iter()
            .copied()
            .find(|role| role.key() == s)
            .ok_or_else(|| format!("unknown color role `{s}`"))
    }
}

/// A role's value: a proper token, or a raw string carried over from themes
/// that predate OKLCH tokens.
///
/// Deserializing a bare string that parses as a color yields a token; only
/// unparseable strings are kept as legacy values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "ColorEntryRepr")]
pub enum ColorEntry {
    Token(ColorToken),
    Legacy(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorEntryRepr {
    Token(ColorToken),
    Text(String),
}

impl From<ColorEntryRepr> for ColorEntry {
    fn from(repr: ColorEntryRepr) -> Self {
        match repr {
            ColorEntryRepr::Token(token) => Self::Token(token),
            ColorEntryRepr::Text(raw) => match parse_any(&raw) {
                Ok(oklch) => Self::Token(ColorToken::new("", oklch)),
                Err(_) => Self::Legacy(raw),
            },
        }
    }
}

impl ColorEntry {
    /// String written to the style target: the canonical token string, or
    /// the raw legacy string when no token exists. Blank legacy strings
    /// have no value.
    pub fn css_value(&self) -> Option<&str> {
        match self {
            Self::Token(token) => Some(token.value()),
            Self::Legacy(raw) => Some(raw.trim()).filter(|raw| !raw.is_empty()),
        }
    }

    pub fn token(&self) -> Option<&ColorToken> {
        match self {
            Self::Token(token) => Some(token),
            Self::Legacy(_) => None,
        }
    }

    /// OKLCH value, resolving legacy strings on demand
    pub fn oklch(&self) -> Option<Oklch> {
        match self {
            Self::Token(token) => Some(token.oklch()),
            Self::Legacy(raw) => parse_any(raw).ok(),
        }
    }
}

impl From<ColorToken> for ColorEntry {
    fn from(token: ColorToken) -> Self {
        Self::Token(token)
    }
}

/// Role-to-color mapping for one mode (light or dark).
///
/// Editing methods consume `self` and return the edited mapping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<ColorRole, ColorEntry>",
    into = "BTreeMap<ColorRole, ColorEntry>"
)]
pub struct ThemeColors {
    entries: BTreeMap<ColorRole, ColorEntry>,
}

impl ThemeColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from OKLCH values, one token per role
    pub fn from_oklch(values: impl IntoIterator<Item = (ColorRole, Oklch)>) -> Self {
        let entries = values
            .into_iter()
            .map(|(role, oklch)| (role, ColorEntry::Token(ColorToken::new(role.key(), oklch))))
            .collect();
        Self { entries }
    }

    pub fn get(&self, role: ColorRole) -> Option<&ColorEntry> {
        self.entries.get(&role)
    }

    pub fn token(&self, role: ColorRole) -> Option<&ColorToken> {
        self.get(role).and_then(ColorEntry::token)
    }

    pub fn oklch(&self, role: ColorRole) -> Option<Oklch> {
        self.get(role).and_then(ColorEntry::oklch)
    }

    pub fn contains(&self, role: ColorRole) -> bool {
        self.entries.contains_key(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &ColorEntry)> {
        self.entries.iter().map(|(role, entry)| (*role, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Roles from `required` that are absent or carry no usable value
    pub fn missing(&self, required: &[ColorRole]) -> Vec<ColorRole> {
        required
            .iter()
            .copied()
            .filter(|role| self.get(*role).and_then(ColorEntry::css_value).is_none())
            .collect()
    }

    /// Store an entry, replacing whatever the role held.
    ///
    /// Link edges are rebuilt from every token's `linked_to`: roles that
    /// mirrored the replaced entry keep mirroring the new one, and a token
    /// arriving with `linked_to` set takes its parent's value. Insert
    /// parents before their children.
    pub fn with_entry(mut self, role: ColorRole, entry: impl Into<ColorEntry>) -> Self {
        self.entries.insert(role, named(role, entry.into()));
        self.reconcile()
    }

    /// Set a role's color.
    ///
    /// A direct edit on a linked role is an override: the role leaves its
    /// parent. Roles linked to this one (transitively) take the new value.
    pub fn with_color(self, role: ColorRole, oklch: Oklch) -> Self {
        let mut colors = self.unlink(role);
        colors.assign(role, oklch);
        colors.propagate(role, oklch);
        colors
    }

    /// Drop a role and every link edge that touches it
    pub fn without(mut self, role: ColorRole) -> Self {
        if let Some(ColorEntry::Token(token)) = self.entries.remove(&role) {
            if let Some(parent) = token.linked_to().and_then(|p| p.parse::<ColorRole>().ok()) {
                self.update_token(parent, |t| t.without_linked_color(role.key()));
            }
            for child in linked_roles(&token) {
                self.update_token(child, ColorToken::without_link);
            }
        }
        self
    }

    /// Make `child` mirror `parent`. The child takes the parent's current
    /// value immediately.
    ///
    /// Ignored when either role has no token, when `child == parent`, or
    /// when the link would form a cycle.
    pub fn link(self, child: ColorRole, parent: ColorRole) -> Self {
        if child == parent || self.token(child).is_none() {
            return self;
        }
        let Some(value) = self.token(parent).map(ColorToken::oklch) else {
            return self;
        };
        if self.ancestors(parent).contains(&child) {
            warn!("refusing to link {} to {}: cycle", child, parent);
            return self;
        }

        let mut colors = self.unlink(child);
        colors.update_token(child, |t| t.with_link(parent.key()));
        colors.update_token(parent, |t| t.with_linked_color(child.key()));
        colors.assign(child, value);
        colors.propagate(child, value);
        colors
    }

    /// Detach `child` from its parent, keeping its current value
    pub fn unlink(mut self, child: ColorRole) -> Self {
        let parent = self
            .token(child)
            .and_then(ColorToken::linked_to)
            .and_then(|p| p.parse::<ColorRole>().ok());
        if let Some(parent) = parent {
            self.update_token(child, ColorToken::without_link);
            self.update_token(parent, |t| t.without_linked_color(child.key()));
        }
        self
    }

    /// Parent of a linked role
    pub fn parent(&self, role: ColorRole) -> Option<ColorRole> {
        self.token(role)
            .and_then(ColorToken::linked_to)
            .and_then(|p| p.parse().ok())
    }

    fn ancestors(&self, role: ColorRole) -> BTreeSet<ColorRole> {
        let mut seen = BTreeSet::new();
        let mut current = self.parent(role);
        while let Some(parent) = current {
            if !seen.insert(parent) {
                break;
            }
            current = self.parent(parent);
        }
        seen
    }

    /// Replace the color of a role, keeping its name and link edges
    fn assign(&mut self, role: ColorRole, oklch: Oklch) {
        let token = match self.entries.get(&role) {
            Some(ColorEntry::Token(existing)) => existing.with_oklch(oklch),
            _ => ColorToken::new(role.key(), oklch),
        };
        self.entries.insert(role, ColorEntry::Token(token));
    }

    fn propagate(&mut self, from: ColorRole, oklch: Oklch) {
        let mut visited = BTreeSet::from([from]);
        let mut pending = self.token(from).map(linked_roles).unwrap_or_default();
        while let Some(child) = pending.pop() {
            if !visited.insert(child) {
                continue;
            }
            self.assign(child, oklch);
            if let Some(token) = self.token(child) {
                pending.extend(linked_roles(token));
            }
        }
    }

    /// Rebuild each parent's `linked_colors` from its children's
    /// `linked_to`, then snap every linked role to its parent's value.
    ///
    /// A `linked_to` naming an unknown role, the role itself, a role without
    /// a token, or closing a cycle is dropped.
    fn reconcile(mut self) -> Self {
        let declared: Vec<(ColorRole, String)> = self
            .entries
            .iter()
            .filter_map(|(role, entry)| {
                let parent = entry.token()?.linked_to()?;
                Some((*role, parent.to_string()))
            })
            .collect();

        let mut parents = BTreeMap::new();
        for (child, parent) in declared {
            match parent.parse::<ColorRole>() {
                Ok(parent)
                    if parent != child
                        && self.token(parent).is_some()
                        && !closes_cycle(&parents, child, parent) =>
                {
                    parents.insert(child, parent);
                }
                _ => {
                    warn!("dropping link from {} to `{}`", child, parent);
                    self.update_token(child, ColorToken::without_link);
                }
            }
        }

        let roles: Vec<ColorRole> = self.entries.keys().copied().collect();
        for role in &roles {
            let is_child_of_role = |child: &ColorRole| parents.get(child) == Some(role);
            self.update_token(*role, |token| {
                let recorded = token
                    .linked_colors()
                    .iter()
                    .filter_map(|child| child.parse::<ColorRole>().ok())
                    .filter(is_child_of_role);
                let rest = parents.keys().copied().filter(is_child_of_role);
                let children: Vec<String> = recorded
                    .chain(rest)
                    .map(|child| child.key().to_string())
                    .collect();
                token.with_linked_colors(children)
            });
        }

        for role in roles {
            if parents.contains_key(&role) {
                continue;
            }
            if let Some(oklch) = self.token(role).map(ColorToken::oklch) {
                self.propagate(role, oklch);
            }
        }
        self
    }

    fn update_token(&mut self, role: ColorRole, f: impl FnOnce(ColorToken) -> ColorToken) {
        if let Some(ColorEntry::Token(token)) = self.entries.get_mut(&role) {
            *token = f(token.clone());
        }
    }
}

/// Tokens carry their role's key as their name
fn named(role: ColorRole, entry: ColorEntry) -> ColorEntry {
    match entry {
        ColorEntry::Token(token) => ColorEntry::Token(token.with_name(role.key())),
        legacy => legacy,
    }
}

/// Whether `child -> parent` would close a loop in the accepted edges
fn closes_cycle(
    parents: &BTreeMap<ColorRole, ColorRole>,
    child: ColorRole,
    parent: ColorRole,
) -> bool {
    let mut current = Some(parent);
    while let Some(role) = current {
        if role == child {
            return true;
        }
        current = parents.get(&role).copied();
    }
    false
}

fn linked_roles(token: &ColorToken) -> Vec<ColorRole> {
    token
        .linked_colors()
        .iter()
        .filter_map(|child| child.parse().ok())
        .collect()
}

impl From<BTreeMap<ColorRole, ColorEntry>> for ThemeColors {
    fn from(entries: BTreeMap<ColorRole, ColorEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<ThemeColors> for BTreeMap<ColorRole, ColorEntry> {
    fn from(colors: ThemeColors) -> Self {
        colors.entries
    }
}

impl FromIterator<(ColorRole, ColorEntry)> for ThemeColors {
    fn from_iter<I: IntoIterator<Item = (ColorRole, ColorEntry)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(role, entry)| (role, named(role, entry)))
            .collect();
        ThemeColors { entries }.reconcile()
    }
}
