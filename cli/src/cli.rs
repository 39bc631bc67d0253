use std::path::PathBuf;

use bizcard_vcard::{Contact, EncodeOptions, Profile, Version, VersionChoice};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "bizcard")]
#[command(about = "Render business cards with a scannable vCard QR code", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the full card (background, text and QR code) to a PNG
    Render(RenderArgs),
    /// Print the vCard payload the QR code would carry
    Vcard {
        #[command(flatten)]
        contact: ContactArgs,

        #[command(flatten)]
        encoding: EncodingArgs,
    },
    /// Write only the QR code (with optional logo) to a PNG
    Qr {
        #[command(flatten)]
        contact: ContactArgs,

        #[command(flatten)]
        encoding: EncodingArgs,

        #[command(flatten)]
        style: QrArgs,

        /// Output file
        #[arg(long, short = 'O', default_value = "bizcard_qr.png")]
        output: PathBuf,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a configuration file with the default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// The contact carried by the QR code. Empty fields are left out.
#[derive(Args, Debug, Clone, Default)]
pub struct ContactArgs {
    /// Full name as typed, e.g. "王小明" or "Ada Lovelace"
    #[arg(long, short = 'n', env = "BIZCARD_NAME", default_value = "")]
    pub name: String,

    /// Company or organisation
    #[arg(long, short = 'o', env = "BIZCARD_ORG", default_value = "")]
    pub org: String,

    /// Job title
    #[arg(long, short = 't', env = "BIZCARD_TITLE", default_value = "")]
    pub title: String,

    /// Phone number
    #[arg(long, env = "BIZCARD_TEL", default_value = "")]
    pub tel: String,

    /// Email address
    #[arg(long, short = 'e', env = "BIZCARD_EMAIL", default_value = "")]
    pub email: String,

    /// Website
    #[arg(long, short = 'u', env = "BIZCARD_URL", default_value = "")]
    pub url: String,

    /// Free-form note
    #[arg(long, env = "BIZCARD_NOTE", default_value = "")]
    pub note: String,
}

impl ContactArgs {
    pub fn to_contact(&self) -> Contact {
        Contact {
            name: self.name.clone(),
            org: self.org.clone(),
            title: self.title.clone(),
            tel: self.tel.clone(),
            email: self.email.clone(),
            url: self.url.clone(),
            note: self.note.clone(),
        }
        .trimmed()
    }
}

/// How the vCard is written.
#[derive(Args, Debug, Clone, Default)]
pub struct EncodingArgs {
    /// Importer profile: standard, apple, android, legacy, modern, minimal
    #[arg(long, short = 'p', env = "BIZCARD_PROFILE")]
    pub profile: Option<Profile>,

    /// Force a vCard version (2.1, 3.0 or 4.0) instead of the profile's
    #[arg(long = "vcard-version", env = "BIZCARD_VCARD_VERSION")]
    pub vcard_version: Option<Version>,
}

impl EncodingArgs {
    /// The flag wins over the configured profile.
    pub fn options(&self, configured: Option<Profile>) -> EncodeOptions {
        let profile = self.profile.or(configured).unwrap_or_default();
        let choice = self.vcard_version.map_or(VersionChoice::Auto, VersionChoice::Exact);
        EncodeOptions::for_profile(profile, choice)
    }
}

/// QR code appearance.
#[derive(Args, Debug, Clone, Default)]
pub struct QrArgs {
    /// Image drawn in the centre of the QR code
    #[arg(long, short = 'l', env = "BIZCARD_LOGO")]
    pub logo: Option<PathBuf>,

    /// Keep the logo's own proportions instead of the 375:140 box
    #[arg(long)]
    pub logo_intrinsic: bool,

    /// QR image side in pixels
    #[arg(long, env = "BIZCARD_QR_SIZE")]
    pub qr_size: Option<u32>,

    /// Module colour, as #rgb or #rrggbb
    #[arg(long, default_value = "#000000")]
    pub dark: String,

    /// Background colour of the symbol
    #[arg(long, default_value = "#ffffff")]
    pub light: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    #[command(flatten)]
    pub contact: ContactArgs,

    #[command(flatten)]
    pub encoding: EncodingArgs,

    #[command(flatten)]
    pub style: QrArgs,

    /// Background photo, scaled to cover the card
    #[arg(long, short = 'b', env = "BIZCARD_BACKGROUND")]
    pub background: Option<PathBuf>,

    /// TrueType/OpenType font for the company and name
    #[arg(long, short = 'f', env = "BIZCARD_FONT")]
    pub font: Option<PathBuf>,

    /// Card width in pixels
    #[arg(long, short = 'W', env = "BIZCARD_WIDTH")]
    pub width: Option<u32>,

    /// Card height in pixels
    #[arg(long, short = 'H', env = "BIZCARD_HEIGHT")]
    pub height: Option<u32>,

    /// Horizontal QR centre, 0.0 (left) to 1.0 (right)
    #[arg(long, env = "BIZCARD_QR_X")]
    pub qr_x: Option<f32>,

    /// Vertical QR centre, 0.0 (top) to 1.0 (bottom)
    #[arg(long, env = "BIZCARD_QR_Y")]
    pub qr_y: Option<f32>,

    /// QR scale, 0.5 to 2.5
    #[arg(long, env = "BIZCARD_QR_SCALE")]
    pub qr_scale: Option<f32>,

    /// Directory for the exported PNG
    #[arg(long, short = 'd', env = "BIZCARD_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Exact output file; overrides --out-dir and the generated name
    #[arg(long, short = 'O', conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write the PNG to stdout when it is piped, saving to a file otherwise
    #[arg(long, short = 's')]
    pub share: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "bizcard",
            "render",
            "--name",
            "王小明",
            "--org",
            "Acme",
            "--profile",
            "android",
            "--qr-scale",
            "1.5",
            "--share",
        ])
        .expect("should parse");
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.contact.name, "王小明");
        assert_eq!(args.encoding.profile, Some(Profile::Android));
        assert_eq!(args.qr_scale, Some(1.5));
        assert!(args.share);
    }

    #[test]
    fn test_parse_rejects_unknown_profile() {
        let result = Cli::try_parse_from(["bizcard", "vcard", "--name", "A", "--profile", "nokia"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_conflicts_with_out_dir() {
        let result = Cli::try_parse_from(["bizcard", "render", "--output", "a.png", "--out-dir", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_override_beats_profile() {
        let encoding = EncodingArgs {
            profile: Some(Profile::Legacy),
            vcard_version: Some(Version::V3_0),
        };
        let options = encoding.options(None);
        assert_eq!(options.version, Version::V3_0);
        assert_eq!(options.charset, Profile::Legacy.options().charset);
    }

    #[test]
    fn test_flag_profile_beats_config() {
        let encoding = EncodingArgs::default();
        assert_eq!(encoding.options(Some(Profile::Minimal)), Profile::Minimal.options());

        let encoding = EncodingArgs {
            profile: Some(Profile::Apple),
            ..EncodingArgs::default()
        };
        assert_eq!(encoding.options(Some(Profile::Minimal)).version, Profile::Apple.version());
    }

    #[test]
    fn test_contact_args_are_trimmed() {
        let args = ContactArgs {
            name: "  Ada  ".to_owned(),
            tel: " 123 ".to_owned(),
            ..ContactArgs::default()
        };
        let contact = args.to_contact();
        assert_eq!(contact.name, "Ada");
        assert_eq!(contact.tel, "123");
    }
}
