use clap::Parser;

const EXAMPLES: &str = "Examples:
  server | logcast -p 43567 > server.log    forward and keep a local copy
  server | logcast -p 43567                 forward and echo to stdout
  server | logcast -p 43567 -m              forward only
  server | logcast -p 43567 --id \"prod server\"";

/// Forward each line of stdin to a UDP listener, tagged with a stream id.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// The recipient server host.
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// The recipient server port.
    #[arg(short, long)]
    pub port: u16,

    /// The log stream id. A fresh unique token is generated when omitted.
    #[arg(long, short = 'n', visible_alias = "name")]
    pub id: Option<String>,

    /// Don't pipe stdin through to stdout.
    #[arg(short, long)]
    pub mute: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_argument_set() {
        let cli = Cli::parse_from([
            "logcast", "--host", "10.0.0.255", "-p", "43567", "--id", "prod", "-m",
        ]);
        assert_eq!(cli.host, "10.0.0.255");
        assert_eq!(cli.port, 43567);
        assert_eq!(cli.id.as_deref(), Some("prod"));
        assert!(cli.mute);
    }

    #[test]
    fn defaults_to_localhost_with_echo_enabled() {
        let cli = Cli::parse_from(["logcast", "-p", "9000"]);
        assert_eq!(cli.host, "localhost");
        assert_eq!(cli.id, None);
        assert!(!cli.mute);
    }

    #[test]
    fn name_is_an_alias_for_id() {
        let cli = Cli::parse_from(["logcast", "-p", "9000", "--name", "staging"]);
        assert_eq!(cli.id.as_deref(), Some("staging"));
    }

    #[test]
    fn port_is_required() {
        assert!(Cli::try_parse_from(["logcast"]).is_err());
    }
}
