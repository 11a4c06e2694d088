// Fake clients are /bin/sh scripts, so this suite is unix only.
#![cfg(unix)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;

mod common;
use common::{assertions, project::TestProject};

#[cfg(test)]
mod gating_tests {
    use super::*;

    #[test]
    fn test_push_refused_for_svn() -> anyhow::Result<()> {
        let project = TestProject::new()?;

        project
            .command()
            .arg("push")
            .assert()
            .failure()
            .stdout(assertions::action_refused());

        Ok(())
    }

    #[test]
    fn test_commit_refused_on_untracked_path() -> anyhow::Result<()> {
        let project = TestProject::new()?;
        project.create_file("new.png", "png")?;
        project.install_fake_client("git", "?? proj/new.png\n")?;
        project.configure("vcs", "git");

        project
            .command()
            .args(["commit", "new.png"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("is not tracked"));

        Ok(())
    }

    #[test]
    fn test_add_refused_on_tracked_path() -> anyhow::Result<()> {
        let project = TestProject::new()?;
        project.create_file("a.png", "png")?;
        project.install_fake_client("git", " M proj/a.png\n")?;
        project.configure("vcs", "git");

        project
            .command()
            .args(["add", "a.png"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("already tracked"));

        Ok(())
    }

    #[test]
    fn test_target_outside_project_refused() -> anyhow::Result<()> {
        let project = TestProject::new()?;
        fs::write(project.parent().join("outside.txt"), "x")?;

        project
            .command()
            .args(["commit", "../outside.txt"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("outside the tracked project tree"));

        Ok(())
    }

    #[test]
    fn test_missing_target_refused() -> anyhow::Result<()> {
        let project = TestProject::new()?;

        project
            .command()
            .args(["commit", "gone.txt"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("does not exist in the working copy"));

        Ok(())
    }
}

#[cfg(test)]
mod launch_tests {
    use super::*;

    #[test]
    fn test_add_combines_asset_and_sidecar_for_tortoise_client() -> anyhow::Result<()> {
        let project = TestProject::new()?;
        project.create_file("new.png", "png")?;
        project.create_file("new.png.meta", "guid")?;
        project.install_fake_client(
            "git",
            concat!("?? proj/new.png\n", "?? proj/new.png.meta\n"),
        )?;
        let log = project.install_recording_gui("fakegui")?;
        project.configure("vcs", "git");
        project.configure("gui-exe", &project.bin_dir.join("fakegui").display().to_string());

        project
            .command()
            .args(["add", "new.png"])
            .assert()
            .success()
            .stdout(predicate::str::contains("add finished"));

        let recorded = fs::read_to_string(&log)?;
        let launches: Vec<&str> = recorded.lines().collect();
        assert_eq!(launches.len(), 1);
        assert!(launches[0].contains("/command:add"));
        assert!(launches[0].contains("new.png*"));
        assert!(launches[0].contains("new.png.meta"));
        assert!(launches[0].contains("/closeonend:0"));

        Ok(())
    }

    #[test]
    fn test_hg_client_gets_one_path_per_launch() -> anyhow::Result<()> {
        let project = TestProject::new()?;
        project.create_file("a.png", "png")?;
        project.create_file("a.png.meta", "guid")?;
        project.install_fake_client("hg", concat!("M proj/a.png\n", "M proj/a.png.meta\n"))?;
        let log = project.install_recording_gui("fakethg")?;
        project.configure("vcs", "hg");
        project.configure("gui-exe", &project.bin_dir.join("fakethg").display().to_string());

        project
            .command()
            .args(["commit", "a.png"])
            .assert()
            .success();

        let recorded = fs::read_to_string(&log)?;
        let launches: Vec<&str> = recorded.lines().collect();
        assert_eq!(launches.len(), 2);
        assert!(launches[0].starts_with("commit "));
        assert!(launches[0].contains("a.png.meta"));
        assert!(launches[1].starts_with("commit "));
        assert!(!launches[1].contains(".meta"));

        Ok(())
    }

    #[test]
    fn test_rename_moves_sidecar_before_asset() -> anyhow::Result<()> {
        let project = TestProject::new()?;
        project.create_dir("Scenes")?;
        project.create_file("Scenes.meta", "guid")?;
        project.install_fake_client("git", " M proj/Scenes\n")?;
        let log = project.install_recording_gui("fakegui")?;
        project.configure("vcs", "git");
        project.configure("gui-exe", &project.bin_dir.join("fakegui").display().to_string());

        project
            .command()
            .args(["rename", "Scenes"])
            .assert()
            .success();

        let recorded = fs::read_to_string(&log)?;
        let launches: Vec<&str> = recorded.lines().collect();
        assert_eq!(launches.len(), 2);
        assert!(launches[0].contains("/command:rename"));
        assert!(launches[0].contains("Scenes.meta"));
        assert!(launches[1].contains("/command:rename"));
        assert!(!launches[1].contains(".meta"));

        Ok(())
    }

    #[test]
    fn test_update_maps_to_pull_for_git() -> anyhow::Result<()> {
        let project = TestProject::new()?;
        project.create_file("a.txt", "x")?;
        project.install_fake_client("git", " M proj/a.txt\n")?;
        let log = project.install_recording_gui("fakegui")?;
        project.configure("vcs", "git");
        project.configure("gui-exe", &project.bin_dir.join("fakegui").display().to_string());

        project.command().arg("update").assert().success();

        let recorded = fs::read_to_string(&log)?;
        assert!(recorded.contains("/command:pull"));

        Ok(())
    }
}
