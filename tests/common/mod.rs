#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the convention-guard binary.
#[macro_export]
macro_rules! convention_guard {
    () => {{
        let mut cmd =
            assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("convention-guard"));
        cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
        cmd
    }};
}

pub const HEADER: &str = "// (c) Euphemism Inc. All right reserved.";
pub const STANDARD_FRAMEWORK: &str = "<TargetFramework>netstandard2.0</TargetFramework>";
pub const APP_FRAMEWORK: &str = "<TargetFramework>netcoreapp2.0</TargetFramework>";

/// Creates a temporary source tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A tree that satisfies every built-in convention.
    pub fn conforming() -> Self {
        let fixture = Self::new();
        fixture.create_source("src/Core/Class1.cs");
        fixture.create_project("src/Core/Coconut.Core.csproj", STANDARD_FRAMEWORK);
        fixture.create_project(
            "src/Presentation/SomeProject/Console/Coconut.Presentation.SomeProject.Console.csproj",
            APP_FRAMEWORK,
        );
        fixture.create_source("tests/Core/Tests/CoreTests.cs");
        fixture.create_test_project("tests/Core/Tests/Coconut.Core.Tests.csproj", "1.2.0");
        fixture.create_test_project("tests/Data/Tests/Coconut.Data.Tests.csproj", "1.2.0");
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a C# source file starting with the copyright header.
    pub fn create_source(&self, relative_path: &str) {
        self.create_file(relative_path, &format!("{HEADER}\nnamespace Coconut;\n"));
    }

    /// Creates a project file declaring the given target framework.
    pub fn create_project(&self, relative_path: &str, framework: &str) {
        self.create_file(
            relative_path,
            &format!("<Project Sdk=\"Microsoft.NET.Sdk\">\n  {framework}\n</Project>\n"),
        );
    }

    /// Creates a test project referencing the MSTest packages.
    pub fn create_test_project(&self, relative_path: &str, adapter_version: &str) {
        self.create_file(
            relative_path,
            &format!(
                "<Project Sdk=\"Microsoft.NET.Sdk\">\n  {APP_FRAMEWORK}\n  \
                 <PackageReference Include=\"MSTest.TestAdapter\" Version=\"{adapter_version}\" />\n  \
                 <PackageReference Include=\"MSTest.TestFramework\" Version=\"1.2.0\" />\n  \
                 <PackageReference Include=\"Microsoft.NET.Test.Sdk\" Version=\"15.5.0\" />\n\
                 </Project>\n"
            ),
        );
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.convention-guard.toml` in the root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".convention-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
