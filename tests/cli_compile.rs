mod common;

use common::*;

#[test]
fn compile_writes_expanded_sources_and_artifacts() {
    let env = TestEnv::new();
    env.write(
        "src/views/home.tpl",
        "<main>\n  <!-- IMPORT partials/header.tpl -->\n</main>",
    );
    env.write("src/views/partials/header.tpl", "<h1>Core</h1>");
    env.write("themes/persona/templates/partials/header.tpl", "<h1>Persona</h1>");

    let result = env.run(&["compile"]);
    assert!(result.success, "compile failed:\n{}", result.combined_output());
    assert!(result.stdout.contains("✓ Compiled 2 template(s) (1 overridden)"));

    assert_eq!(env.view("home.tpl"), "<main>\n  <h1>Persona</h1>\n</main>");
    assert_eq!(env.view("partials/header.tpl"), "<h1>Persona</h1>");
    assert_eq!(
        env.view("home.js"),
        r#"module.exports=function(){return "<main><h1>Persona</h1></main>"};"#
    );
    assert!(env.exists(&format!("{}/partials/header.js", VIEWS)));
}

#[test]
fn compile_removes_stale_output() {
    let env = TestEnv::new();
    env.write("src/views/page.tpl", "page");
    env.write(&format!("{}/old/stale.tpl", VIEWS), "stale");

    let result = env.run(&["compile"]);
    assert!(result.success, "compile failed:\n{}", result.combined_output());

    assert!(!env.exists(&format!("{}/old", VIEWS)));
    assert_eq!(env.view("page.tpl"), "page");
}

#[test]
fn compile_follows_base_theme_chain() {
    let env = TestEnv::new();
    env.write("themes/persona/theme.json", r#"{"baseTheme": "vanilla"}"#);
    env.write("themes/vanilla/theme.json", r#"{"baseTheme": "classic", "templates": "views"}"#);
    env.write("themes/classic/theme.json", "{}");
    env.write("src/views/footer.tpl", "core footer");
    env.write("themes/classic/templates/footer.tpl", "classic footer");
    env.write("themes/classic/templates/header.tpl", "classic header");
    env.write("themes/vanilla/views/footer.tpl", "vanilla footer");

    let result = env.run(&["compile"]);
    assert!(result.success, "compile failed:\n{}", result.combined_output());

    assert_eq!(env.view("footer.tpl"), "vanilla footer");
    assert_eq!(env.view("header.tpl"), "classic header");
}

#[test]
fn unresolved_import_is_reported_and_stripped() {
    let env = TestEnv::new();
    env.write("src/views/page.tpl", "a<!-- IMPORT ghost.tpl -->b");

    let result = env.run(&["compile"]);
    assert!(result.success, "compile failed:\n{}", result.combined_output());
    assert!(result.stdout.contains("⚠ Partial not loaded: ghost.tpl"));
    assert_eq!(env.view("page.tpl"), "ab");
}

#[test]
fn development_env_keeps_readable_artifacts() {
    let env = TestEnv::new();
    env.write("src/views/page.tpl", "<p>\n  hi\n</p>");

    let result = env.run_with_env(&["compile"], &[("FORUM_ENV", "development")]);
    assert!(result.success, "compile failed:\n{}", result.combined_output());

    let artifact = env.view("page.js");
    assert!(artifact.starts_with("'use strict';"));
    assert!(artifact.contains(r#""<p>\n  hi\n</p>""#));
}

#[test]
fn config_file_paths_are_relative_to_config() {
    let env = TestEnv::new();
    env.write(
        "site/forum.toml",
        r#"
[paths]
views_dir = "out"
core_templates_path = "../src/views"
base_templates_path = "../themes/persona/templates"
theme_config = "../themes/persona/theme.json"
"#,
    );
    env.write("src/views/page.tpl", "page");

    let result = env.run(&["--config", "site/forum.toml", "compile"]);
    assert!(result.success, "compile failed:\n{}", result.combined_output());
    assert_eq!(env.read("site/out/page.tpl"), "page");
}

#[test]
fn views_dir_env_override() {
    let env = TestEnv::new();
    env.write("src/views/page.tpl", "page");
    let target = env.path("elsewhere");
    let target = target.to_string_lossy();

    let result = env.run_with_env(&["compile"], &[("FORUM_VIEWS_DIR", target.as_ref())]);
    assert!(result.success, "compile failed:\n{}", result.combined_output());
    assert_eq!(env.read("elsewhere/page.tpl"), "page");
    assert!(!env.exists(VIEWS));
}

#[test]
fn missing_theme_config_fails_and_keeps_output() {
    let env = TestEnv::new();
    std::fs::remove_file(env.path("themes/persona/theme.json")).unwrap();
    env.write(&format!("{}/keep.tpl", VIEWS), "keep");

    let result = env.run(&["compile"]);
    assert!(!result.success);
    assert!(result.stderr.contains("theme.json"), "stderr:\n{}", result.stderr);
    assert_eq!(env.view("keep.tpl"), "keep");
}

#[test]
fn import_cycle_hits_limit() {
    let env = TestEnv::new();
    env.write(
        "forum.toml",
        r#"
[compile]
max_imports = 16
"#,
    );
    env.write("src/views/page.tpl", "<!-- IMPORT b.tpl -->");
    env.write("src/views/b.tpl", "<!-- IMPORT c.tpl -->");
    env.write("src/views/c.tpl", "<!-- IMPORT b.tpl -->");

    let result = env.run(&["compile"]);
    assert!(!result.success);
    assert!(
        result.stderr.contains("more than 16 partials"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn json_report_lists_artifacts() {
    let env = TestEnv::new();
    env.write("src/views/page.tpl", "page");

    let result = env.run(&["compile", "--json"]);
    assert!(result.success, "compile failed:\n{}", result.combined_output());

    let value: serde_json::Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(value["event"], "compiled");
    assert_eq!(value["templates"][0]["template"], "/page.tpl");
    assert!(value["templates"][0]["artifact"]
        .as_str()
        .unwrap()
        .ends_with("page.js"));
}

#[test]
fn plugin_templates_override_themes() {
    let env = TestEnv::new();
    env.write(
        "forum.toml",
        r#"
[plugins]
template_dirs = ["plugins/markdown/templates"]
"#,
    );
    env.write("src/views/post.tpl", "core post");
    env.write("themes/persona/templates/post.tpl", "persona post");
    env.write("plugins/markdown/templates/post.tpl", "markdown post");

    let result = env.run(&["compile"]);
    assert!(result.success, "compile failed:\n{}", result.combined_output());
    assert_eq!(env.view("post.tpl"), "markdown post");
    assert!(result.stdout.contains("(2 overridden)"));
}

#[test]
fn binary_file_in_template_root_does_not_abort_compile() {
    let env = TestEnv::new();
    env.write("src/views/home.tpl", "home");
    std::fs::write(env.path("src/views/logo.png"), [0x89, b'P', 0xff, 0xfe]).unwrap();

    let result = env.run(&["compile"]);
    assert!(result.success, "compile failed:\n{}", result.combined_output());
    assert_eq!(env.view("home.tpl"), "home");
    assert!(env.exists(&format!("{}/logo.png", VIEWS)));
}

#[test]
fn relative_views_dir_env_resolves_from_working_dir() {
    let env = TestEnv::new();
    env.write(
        "site/forum.toml",
        r#"
[paths]
core_templates_path = "../src/views"
base_templates_path = "../themes/persona/templates"
theme_config = "../themes/persona/theme.json"
"#,
    );
    env.write("src/views/page.tpl", "page");

    let result = env.run_with_env(
        &["--config", "site/forum.toml", "compile"],
        &[("FORUM_VIEWS_DIR", "public/views")],
    );
    assert!(result.success, "compile failed:\n{}", result.combined_output());
    assert_eq!(env.read("public/views/page.tpl"), "page");
    assert!(!env.exists("site/public"));
}
