use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, LOCALES, stderr, stdout};

fn setup_fr(test: &CliTest) -> Result<()> {
    test.write_locale_file(
        "fr",
        "settings.json",
        r#"{
  "sections": {
    "providers": "Fournisseurs",
    "browser": "Navigateur"
  },
  "autoApprove": {
    "readOnly": {
      "label": "Lecture"
    },
    "browser": {
      "label": "Navigateur"
    }
  },
  "browser": {
    "enable": {
      "label": "Activer"
    }
  },
  "providers": {
    "customModel": {
      "maxTokens": "Jetons max",
      "computerUse": "Utilisation de l'ordinateur"
    }
  }
}
"#,
    )?;
    test.write_locale_file(
        "fr",
        "kilocode.json",
        "{\n\t\"notifications\": {\n\t\t\"browserAction\": \"Action\",\n\t\t\"command\": \"Commande\"\n\t},\n\t\"taskTimeline\": {\n\t\t\"tooltip\": {\n\t\t\t\"messageTypes\": {\n\t\t\t\t\"browser_action\": \"a\",\n\t\t\t\t\"browser_action_result\": \"r\",\n\t\t\t\t\"browser_action_launch\": \"l\",\n\t\t\t\t\"text\": \"Texte\"\n\t\t\t}\n\t\t}\n\t}\n}\n",
    )?;
    test.write_locale_file(
        "fr",
        "chat.json",
        r#"{
  "greeting": "Bonjour",
  "browser": {
    "rooWantsToUse": "Kilo veut utiliser le navigateur"
  },
  "browserSession": "Session"
}
"#,
    )?;
    test.write_locale_file(
        "fr",
        "prompts.json",
        r#"{
  "tools": {
    "toolNames": {
      "read": "Lire",
      "browser": "Navigateur"
    }
  }
}
"#,
    )?;
    Ok(())
}

#[test]
fn test_remove_browser_all_files() -> Result<()> {
    let test = CliTest::new()?;
    setup_fr(&test)?;

    let output = test.remove_browser_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!(
            "updated: {0}/fr/settings.json\n\
             updated: {0}/fr/kilocode.json\n\
             updated: {0}/fr/chat.json\n\
             updated: {0}/fr/prompts.json\n\
             done\n",
            LOCALES
        )
    );

    assert_snapshot!(test.read_locale_file("fr", "settings.json")?, @r#"
{
  "sections": {
    "providers": "Fournisseurs"
  },
  "autoApprove": {
    "readOnly": {
      "label": "Lecture"
    }
  },
  "providers": {
    "customModel": {
      "maxTokens": "Jetons max"
    }
  }
}
"#);
    assert_eq!(
        test.read_locale_file("fr", "kilocode.json")?,
        "{\n\t\"notifications\": {\n\t\t\"command\": \"Commande\"\n\t},\n\t\"taskTimeline\": {\n\t\t\"tooltip\": {\n\t\t\t\"messageTypes\": {\n\t\t\t\t\"text\": \"Texte\"\n\t\t\t}\n\t\t}\n\t}\n}\n"
    );
    assert_eq!(
        test.read_locale_file("fr", "chat.json")?,
        "{\n  \"greeting\": \"Bonjour\"\n}\n"
    );
    assert_eq!(
        test.read_locale_file("fr", "prompts.json")?,
        "{\n  \"tools\": {\n    \"toolNames\": {\n      \"read\": \"Lire\"\n    }\n  }\n}\n"
    );

    Ok(())
}

#[test]
fn test_remove_browser_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    setup_fr(&test)?;

    test.remove_browser_command().output()?;
    let chat = test.read_locale_file("fr", "chat.json")?;
    let chat_modified = test.modified(&format!("{}/fr/chat.json", LOCALES))?;

    let second = test.remove_browser_command().output()?;

    assert!(second.status.success());
    assert_eq!(stdout(&second), "done\n");
    assert_eq!(test.read_locale_file("fr", "chat.json")?, chat);
    assert_eq!(
        test.modified(&format!("{}/fr/chat.json", LOCALES))?,
        chat_modified
    );

    Ok(())
}

#[test]
fn test_remove_browser_untouched_file_keeps_mtime() -> Result<()> {
    let test = CliTest::new()?;
    let content = "{\n\t\"greeting\": \"Hallo\"\n}\n";
    test.write_locale_file("de", "chat.json", content)?;
    let path = format!("{}/de/chat.json", LOCALES);
    let before = test.modified(&path)?;

    let output = test.remove_browser_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "done\n");
    assert_eq!(test.read_locale_file("de", "chat.json")?, content);
    assert_eq!(test.modified(&path)?, before);

    Ok(())
}

#[test]
fn test_remove_browser_non_mapping_section() -> Result<()> {
    let test = CliTest::new()?;
    let content = "{\n  \"autoApprove\": \"toujours\",\n  \"title\": \"Paramètres\"\n}\n";
    test.write_locale_file("fr", "settings.json", content)?;

    let output = test.remove_browser_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "done\n");
    assert_eq!(test.read_locale_file("fr", "settings.json")?, content);

    Ok(())
}

#[test]
fn test_remove_browser_ignores_stray_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(&format!("{}/index.ts", LOCALES), "export {}\n")?;
    test.write_locale_file("pt-BR", "chat.json", r#"{"browserUse": "Usar"}"#)?;

    let output = test.remove_browser_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("updated: {}/pt-BR/chat.json\ndone\n", LOCALES)
    );
    assert_eq!(test.read_locale_file("pt-BR", "chat.json")?, "{}\n");

    Ok(())
}

#[test]
fn test_remove_browser_malformed_json_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale_file("fr", "chat.json", "{ \"browser\": ")?;

    let output = test.remove_browser_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse JSON"));
    assert!(stderr(&output).contains("chat.json"));

    Ok(())
}

#[test]
fn test_remove_browser_reports_updates_before_failure() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale_file("aa", "chat.json", r#"{"browserUse":"x"}"#)?;
    test.write_locale_file("bb", "chat.json", "{ \"browser\": ")?;

    let output = test.remove_browser_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.read_locale_file("aa", "chat.json")?, "{}\n");
    assert!(stdout(&output).contains(&format!("updated: {}/aa/chat.json", LOCALES)));
    assert!(!stdout(&output).contains("done"));
    assert!(stderr(&output).contains("Failed to parse JSON"));

    Ok(())
}

#[test]
fn test_remove_browser_dry_run() -> Result<()> {
    let test = CliTest::new()?;
    let content = r#"{"browser": {}, "greeting": "Hola"}"#;
    test.write_locale_file("es", "chat.json", content)?;

    let output = test
        .remove_browser_command()
        .args(["--dry-run", "--verbose"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(&format!("would update: {}/es/chat.json", LOCALES)));
    assert!(stdout(&output).contains("  - removed browser"));
    assert!(stdout(&output).contains("(no such file)"));
    assert!(stdout(&output).contains("1 file(s) would be updated across 1 locale(s)"));
    assert_eq!(test.read_locale_file("es", "chat.json")?, content);

    Ok(())
}
