use honker::adapters::outbound::archive::{
    ArchiveLicenseFilesLoader, EmbeddedPomLoader, JarManifestLoader,
};
use honker::adapters::outbound::console::StderrProgressReporter;
use honker::adapters::outbound::filesystem::{
    DirectoryTemplateStore, TomlDependencyResolver, DEPENDENCIES_FILE_NAME,
};
use honker::application::dto::{AuditRequest, LicenseOverrides, OutputFormat, ProjectIdentity};
use honker::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use honker::application::read_models::AuditReadModelBuilder;
use honker::application::use_cases::{AuditLicensesUseCase, LoadDependencyTreeUseCase};
use honker::cli::Args;
use honker::config::{self, ConfigFile};
use honker::license_compliance::domain::License;
use honker::shared::error::{ExitCode, HonkerError};
use honker::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Templates directory looked up in the project when none is configured
const DEFAULT_TEMPLATES_DIR: &str = "templates";

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Everything needed to run one audit, after merging CLI, config and defaults
#[derive(Debug)]
struct AuditSettings {
    request: AuditRequest,
    templates_dir: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    fail_on_conflicts: bool,
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate project directory
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    // Load configuration, explicit path first, then discovery
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(&project_path)?.unwrap_or_default(),
    };
    let settings = resolve_settings(args, config, &project_path)?;

    // Create adapters (Dependency Injection)
    let tree_loader = LoadDependencyTreeUseCase::new(
        JarManifestLoader::new(),
        EmbeddedPomLoader::new(),
        ArchiveLicenseFilesLoader::new(),
        StderrProgressReporter::new(),
    );
    let use_case = AuditLicensesUseCase::new(
        TomlDependencyResolver::new(),
        DirectoryTemplateStore::new(settings.templates_dir),
        tree_loader,
    );

    // Execute use case
    let response = use_case.execute(settings.request)?;

    // Format and present the report
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let model = AuditReadModelBuilder::build(&response);
    let formatted_output = FormatterFactory::create(settings.format).format(&model)?;
    PresenterFactory::create(PresenterType::from_output(settings.output))
        .present(&formatted_output)?;

    if response.has_conflicts() && settings.fail_on_conflicts {
        eprintln!(
            "❌ {} license conflict(s) detected with {}",
            response.conflicts.len(),
            response.reference_license
        );
        return Ok(ExitCode::LicenseConflictsDetected);
    }
    Ok(ExitCode::Success)
}

/// Merges CLI arguments over configuration over defaults
///
/// Paths from the configuration file are relative to the project directory;
/// paths given on the command line are used as-is.
fn resolve_settings(args: Args, config: ConfigFile, project_path: &Path) -> Result<AuditSettings> {
    let license = match (args.license, config.license.as_deref()) {
        (Some(license), _) => license,
        (None, Some(name)) => name.parse::<License>()?,
        (None, None) => License::Apache2,
    };

    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => name.parse::<OutputFormat>().map_err(|message| {
            HonkerError::Validation {
                message: format!("Invalid config: format: {}", message),
            }
        })?,
        (None, None) => OutputFormat::default(),
    };

    let dependencies_file = args.dependencies.unwrap_or_else(|| {
        project_path.join(
            config
                .dependencies_file
                .unwrap_or_else(|| PathBuf::from(DEPENDENCIES_FILE_NAME)),
        )
    });
    let templates_dir = args.templates.unwrap_or_else(|| {
        project_path.join(
            config
                .templates_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR)),
        )
    });

    let mut project = ProjectIdentity::new(license);
    project.name = config.project_name;
    project.organization = config.project_organization;

    let license_overrides: LicenseOverrides = config
        .license_overrides
        .unwrap_or_default()
        .into_iter()
        .collect();

    Ok(AuditSettings {
        request: AuditRequest::new(dependencies_file, project, license_overrides),
        templates_dir,
        format,
        output: args.output,
        fail_on_conflicts: args.fail_on_conflicts || config.fail_on_conflicts.unwrap_or(false),
    })
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(HonkerError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| HonkerError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(HonkerError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(HonkerError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
