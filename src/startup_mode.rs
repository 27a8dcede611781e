use std::env;

/// How the primary binary should run, decided from the command line alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupMode {
    /// No extra arguments: verify the embedded resource and exit without
    /// ever constructing a window.
    HeadlessCheck,
    /// Any argument at all: show the dialog and run the event loop.
    Windowed,
}

/// Resolves the startup mode from an iterator over the extra arguments
/// (everything after the program name). The arguments themselves are never
/// inspected; only their presence matters.
pub fn resolve_startup_mode<I>(mut extra_args: I) -> StartupMode
where
    I: Iterator<Item = String>,
{
    if extra_args.next().is_some() {
        StartupMode::Windowed
    } else {
        StartupMode::HeadlessCheck
    }
}

pub fn startup_mode_from_env() -> StartupMode {
    resolve_startup_mode(env::args().skip(1))
}

#[cfg(test)]
mod tests {
    use super::{resolve_startup_mode, StartupMode};

    fn args(values: &[&str]) -> impl Iterator<Item = String> + '_ {
        values.iter().map(|value| value.to_string())
    }

    #[test]
    fn no_extra_arguments_selects_headless_check() {
        assert_eq!(resolve_startup_mode(args(&[])), StartupMode::HeadlessCheck);
    }

    #[test]
    fn any_argument_selects_windowed_mode() {
        assert_eq!(resolve_startup_mode(args(&["show"])), StartupMode::Windowed);
        assert_eq!(
            resolve_startup_mode(args(&["--anything", "else"])),
            StartupMode::Windowed
        );
    }
}
