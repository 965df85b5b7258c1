//! End-to-end tests of the built-in modules through the dispatcher.

mod common;

use common::{group_chat, private_chat, MockTransport, TestBot};
use ubot_modules::VERSION;

#[test]
fn test_builtin_manifest_loads_all_modules_in_order() {
    let bot = TestBot::load();

    assert_eq!(
        bot.report.loaded,
        vec!["system", "help", "language", "chatinfo"]
    );
    assert!(bot.report.failed.is_empty());
    let commands = [
        "ping", "status", "mods", "usage", "modinfo", "lang", "setlang", "chatid", "link",
    ];
    for command in commands {
        assert!(bot.handler.has_command(command), "missing {}", command);
        assert!(bot.registries.has_usage(command), "no usage for {}", command);
    }
}

#[test]
fn test_disabled_module_registers_nothing() {
    let bot = TestBot::load_without(&["chatinfo"]);

    assert_eq!(bot.report.skipped, vec!["chatinfo"]);
    assert!(!bot.handler.has_command("chatid"));
    assert!(!bot.registries.is_registered("chatinfo"));
}

#[tokio::test]
async fn test_ping_edits_to_pong() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    assert_eq!(bot.run(&mock, ".ping").await.as_deref(), Some("Pong!"));
}

#[tokio::test]
async fn test_status_reports_module_count_and_language() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let text = bot.run(&mock, ".status").await.unwrap();
    assert_eq!(
        text,
        format!("ubot v{}\nModules loaded: 4\nLanguage: en", VERSION)
    );
}

#[tokio::test]
async fn test_setlang_switches_every_module() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let changed = bot.run(&mock, ".setlang fr").await.unwrap();
    assert_eq!(changed, "Langue changée en Français (fr).");
    assert_eq!(bot.locale.current(), "fr");

    assert_eq!(bot.run(&mock, ".ping").await.as_deref(), Some("Pong !"));
    let chat_id = bot.run(&mock, ".chatid").await.unwrap();
    assert_eq!(chat_id, "ID du chat : -100777");
}

#[tokio::test]
async fn test_setlang_rejects_unsupported_code() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let text = bot.run(&mock, ".setlang xx").await.unwrap();
    assert_eq!(
        text,
        "Unsupported language code 'xx'. Supported: de, en, es, fr"
    );
    assert_eq!(bot.locale.current(), "en");
}

#[tokio::test]
async fn test_setlang_requires_exactly_one_code() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let text = bot.run(&mock, ".setlang de fr").await.unwrap();
    assert_eq!(text, "Please give exactly one language code.");
    assert_eq!(bot.locale.current(), "en");

    // No argument at all: the command does not match.
    assert_eq!(bot.run(&mock, ".setlang").await, Some(text));
    assert_eq!(mock.edits().len(), 1);
}

#[tokio::test]
async fn test_lang_shows_current_language() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let text = bot.run(&mock, ".lang").await.unwrap();
    assert_eq!(text, "Current language: English (en)");
}

#[tokio::test]
async fn test_usage_shows_registered_usage() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let text = bot.run(&mock, ".usage setlang").await.unwrap();
    assert_eq!(
        text,
        "Usage of setlang:\n.setlang <language code>\n\n\
         Switches every module to the given language code."
    );

    let prefixed = bot.run(&mock, ".usage .ping").await.unwrap();
    assert!(prefixed.starts_with("Usage of ping:\n.ping\n"));
}

#[tokio::test]
async fn test_usage_of_unknown_command() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let text = bot.run(&mock, ".usage nope").await.unwrap();
    assert_eq!(text, "No usage registered for command 'nope'.");
}

#[tokio::test]
async fn test_mods_lists_modules_with_descriptions() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let text = bot.run(&mock, ".mods").await.unwrap();
    assert!(text.starts_with("Loaded modules:\n"));
    assert!(text.contains("• chatinfo: Chat identity and invite links."));
    assert!(text.contains("• help: Lists modules and shows command usages."));
    assert!(text.find("• chatinfo").unwrap() < text.find("• system").unwrap());
}

#[tokio::test]
async fn test_modinfo_shows_metadata_and_commands() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let text = bot.run(&mock, ".modinfo system").await.unwrap();
    assert!(text.starts_with(&format!(
        "Module: System\nAuthors: ubot contributors\nVersion: {}",
        VERSION
    )));
    assert!(text.contains("Commands:\n"));
    assert!(text.contains("\n.ping"));
    assert!(text.contains("\n.status"));

    let unknown = bot.run(&mock, ".modinfo ghost").await.unwrap();
    assert_eq!(unknown, "Module 'ghost' is not loaded.");
}

#[tokio::test]
async fn test_chatid_in_group_and_private_chat() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let group = bot.run_in(&mock, group_chat(), ".chatid").await.unwrap();
    assert_eq!(group, "Chat ID: -100777");

    let private = bot.run_in(&mock, private_chat(), ".chatid").await.unwrap();
    assert_eq!(private, "This is not a group or channel.");
}

#[tokio::test]
async fn test_link_for_admin() {
    let bot = TestBot::load();
    let mock = MockTransport::admin();

    let text = bot.run(&mock, ".link").await.unwrap();
    assert_eq!(text, "Invite link of Rustaceans:\nhttps://t.me/+link100777");
}

#[tokio::test]
async fn test_link_without_admin_rights_explains_why() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    let text = bot.run(&mock, ".link").await.unwrap();
    assert_eq!(text, "I need admin rights to export the invite link.");
}

#[tokio::test]
async fn test_link_export_failure() {
    let bot = TestBot::load();
    let mock = std::sync::Arc::new(MockTransport {
        admin: true,
        export_fails: true,
        ..MockTransport::default()
    });

    let text = bot.run(&mock, ".link").await.unwrap();
    assert_eq!(text, "Unable to get the invite link.");
}

#[tokio::test]
async fn test_link_in_private_chat() {
    let bot = TestBot::load();
    let mock = MockTransport::admin();

    let text = bot.run_in(&mock, private_chat(), ".link").await.unwrap();
    assert_eq!(text, "This is not a group or channel.");
}

#[tokio::test]
async fn test_help_texts_follow_language_switch() {
    let bot = TestBot::load();
    let mock = MockTransport::new();

    bot.run(&mock, ".setlang fr").await.unwrap();

    let mods = bot.run(&mock, ".mods").await.unwrap();
    assert!(mods.starts_with("Modules chargés :\n"));
    assert!(mods.contains("• chatinfo: Identité du chat et liens d'invitation."));
    assert!(mods.contains("• help: Liste les modules et affiche l'utilisation des commandes."));

    let usage = bot.run(&mock, ".usage setlang").await.unwrap();
    assert_eq!(
        usage,
        "Utilisation de setlang :\n.setlang <code de langue>\n\n\
         Passe tous les modules au code de langue indiqué."
    );
}
