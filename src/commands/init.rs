use std::fs;

use crate::cli::InitArgs;
use crate::{ConventionGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ConventionGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# convention-guard configuration file
# Every value below is the built-in default; delete what you do not change.

[scanner]
# Paths containing any of these (case-insensitive, "/" separators) are skipped.
exclude_markers = ["/.git/", "/.vs/", "/debug/", "/obj/", ".designer.cs"]

[classification]
# A project path containing a test marker is a test project.
test_markers = [".tests", "TestInfrastructure"]
# A project path containing one of these names is a frontend application.
frontend_projects = ["Coconut.Presentation.SomeProject.Console"]

# Every source file must start with the header text.
[header]
enabled = true
pattern = "*.cs"
text = "// (c) Euphemism Inc. All right reserved."
message = "Header text not found in {count} file(s):\n{files}"

# Project names are derived from their directory: Coconut.Foo.Bar lives in .../Foo/Bar/.
[naming]
enabled = true
pattern = "*.csproj"
base = "Coconut"
# "strict" compares the whole name with the path; "prefix" accepts any name under base.
mode = "strict"
message = "{count} csproj file(s) with wrong file name:\n{files}"

# Required target framework declaration per project kind.
[target_framework]
enabled = true
pattern = "*.csproj"
standard = "<TargetFramework>netstandard2.0</TargetFramework>"
frontend = "<TargetFramework>netcoreapp2.0</TargetFramework>"
test = "<TargetFramework>netcoreapp2.0</TargetFramework>"
message = "{count} csproj file(s) with wrong target framework:\n{files}"

# Declarations that must read the same in every project of the listed kinds.
# The first match, in path order, is the reference.
[[consistency]]
name = "mstest-adapter"
pattern = "*.csproj"
applies_to = ["test"]
regex = '<PackageReference Include="MSTest\.TestAdapter" Version="\d+\.\d+\.\d+" />'
case_insensitive = true
message = "{count} csproj file(s) with wrong target MS Test Adapter:\n{files}"

[[consistency]]
name = "mstest-framework"
pattern = "*.csproj"
applies_to = ["test"]
regex = '<PackageReference Include="MSTest\.TestFramework" Version="\d+\.\d+\.\d+" />'
case_insensitive = true
message = "{count} csproj file(s) with wrong target MS Test Framework:\n{files}"

[[consistency]]
name = "test-sdk"
pattern = "*.csproj"
applies_to = ["test"]
regex = '<PackageReference Include="Microsoft\.NET\.Test\.Sdk" Version="\d+\.\d+\.\d+" />'
case_insensitive = true
message = "{count} csproj file(s) with wrong target MS Test Sdk:\n{files}"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
