//! Launch method registry
//!
//! Static mapping from file type to invocation strategies. The set of
//! supported file types is a closed enum; catalog entries carry the type as
//! a raw string and are resolved here at dispatch time, so an unknown type
//! is an unsupported-type dispatch failure rather than a parse failure.

/// How a strategy invokes the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMethod {
    /// Execute the target path itself
    Direct,
    /// Execute a prefix command with the target path appended; an empty
    /// command means shell-interpreted invocation
    Command,
}

impl LaunchMethod {
    /// Parse a launch-method hint. The original catalog format used "cmd"
    /// where newer catalogs say "command"; both are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "direct" => Some(Self::Direct),
            "command" | "cmd" => Some(Self::Command),
            _ => None,
        }
    }
}

/// One invocation recipe for a file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchStrategy {
    pub method: LaunchMethod,
    /// Prefix program, possibly multi-token ("java -jar"); empty for direct
    /// execution and for shell-interpreted command execution
    pub command: &'static str,
    /// Presentation-only label shown next to the tool type
    pub icon: &'static str,
}

/// Supported file types, each carrying its registered strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Vbs,
    Exe,
    Bat,
    Jar,
    Py,
    Sh,
    Php,
    Js,
}

const VBS: &[LaunchStrategy] = &[LaunchStrategy {
    method: LaunchMethod::Command,
    command: "cscript",
    icon: "🌐",
}];

// exe registers two strategies: direct execution first (the default), then
// shell-wrapped execution selected by a "command" hint.
const EXE: &[LaunchStrategy] = &[
    LaunchStrategy {
        method: LaunchMethod::Direct,
        command: "",
        icon: "⚙️",
    },
    LaunchStrategy {
        method: LaunchMethod::Command,
        command: "",
        icon: "⚙️",
    },
];

const BAT: &[LaunchStrategy] = &[LaunchStrategy {
    method: LaunchMethod::Command,
    command: "",
    icon: "🔧",
}];

const JAR: &[LaunchStrategy] = &[LaunchStrategy {
    method: LaunchMethod::Command,
    command: "java -jar",
    icon: "☕",
}];

const PY: &[LaunchStrategy] = &[LaunchStrategy {
    method: LaunchMethod::Command,
    command: "python",
    icon: "🐍",
}];

const SH: &[LaunchStrategy] = &[LaunchStrategy {
    method: LaunchMethod::Command,
    command: "bash",
    icon: "🐚",
}];

const PHP: &[LaunchStrategy] = &[LaunchStrategy {
    method: LaunchMethod::Command,
    command: "php",
    icon: "🌐",
}];

const JS: &[LaunchStrategy] = &[LaunchStrategy {
    method: LaunchMethod::Command,
    command: "node",
    icon: "📱",
}];

impl FileType {
    /// Parse from a catalog type string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vbs" => Some(Self::Vbs),
            "exe" => Some(Self::Exe),
            "bat" => Some(Self::Bat),
            "jar" => Some(Self::Jar),
            "py" => Some(Self::Py),
            "sh" => Some(Self::Sh),
            "php" => Some(Self::Php),
            "js" => Some(Self::Js),
            _ => None,
        }
    }

    /// Registered strategies, in registration order
    pub fn strategies(&self) -> &'static [LaunchStrategy] {
        match self {
            Self::Vbs => VBS,
            Self::Exe => EXE,
            Self::Bat => BAT,
            Self::Jar => JAR,
            Self::Py => PY,
            Self::Sh => SH,
            Self::Php => PHP,
            Self::Js => JS,
        }
    }

    /// All registered file types
    pub fn all() -> &'static [FileType] {
        &[
            Self::Vbs,
            Self::Exe,
            Self::Bat,
            Self::Jar,
            Self::Py,
            Self::Sh,
            Self::Php,
            Self::Js,
        ]
    }
}

/// Resolve a file type string and optional launch-method hint to a strategy.
///
/// Unknown file types yield `None`. For multi-strategy types the hint picks
/// among the registered strategies; an absent or unrecognized hint falls
/// back to the first-registered strategy.
pub fn resolve(file_type: &str, hint: Option<&str>) -> Option<&'static LaunchStrategy> {
    let strategies = FileType::parse(file_type)?.strategies();

    if let Some(method) = hint.and_then(LaunchMethod::parse) {
        if let Some(strategy) = strategies.iter().find(|s| s.method == method) {
            return Some(strategy);
        }
    }

    strategies.first()
}
