//! CLI commands against a mocked backend.

use std::sync::Arc;

use at_app::session::SessionGate;
use at_core::portfolio::DocumentKind;
use at_core::ports::storage::keys;
use at_core::session::AuthSession;
use at_core::{AuthToken, Screen, User};
use atmosphere_lib::bootstrap::config::default_config;
use atmosphere_lib::bootstrap::{wire_dependencies, AppRuntime, HostPorts};
use atmosphere_lib::cli::commands::investor::InvestorCommands;
use atmosphere_lib::cli::commands::startup::StartupCommands;
use atmosphere_lib::cli::commands::verify::VerifyCommands;
use atmosphere_lib::cli::commands::{auth::LoginArgs, run_command, CommandContext};
use atmosphere_lib::cli::ports::{LoggingEvents, QueuedPicker, TerminalAlerts};
use atmosphere_lib::cli::Commands;
use mockito::{Matcher, Server};
use serde_json::json;
use tempfile::TempDir;

fn user_json(role: &str, extra: serde_json::Value) -> serde_json::Value {
    let mut user = json!({
        "id": "u1",
        "email": "ada@example.com",
        "username": "ada_l",
        "displayName": "Ada",
        "roles": [role],
    });
    if let (Some(user), Some(extra)) = (user.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            user.insert(key.clone(), value.clone());
        }
    }
    user
}

async fn sign_in(runtime: &AppRuntime, user: serde_json::Value) {
    let user: User = serde_json::from_value(user).unwrap();
    runtime
        .session
        .sign_in(AuthSession {
            token: AuthToken::new("t1"),
            user,
        })
        .await
        .unwrap();
}

fn rewire_hosts() -> HostPorts {
    HostPorts {
        alerts: Arc::new(TerminalAlerts),
        picker: Arc::new(QueuedPicker::default()),
        setup_events: Arc::new(LoggingEvents),
        verification_events: Arc::new(LoggingEvents),
    }
}

async fn runtime(base_url: String) -> (TempDir, AppRuntime, Arc<QueuedPicker>) {
    let dir = TempDir::new().unwrap();
    let mut config = default_config(dir.path().to_path_buf());
    config.api_base_url = base_url;
    let picker = Arc::new(QueuedPicker::default());
    let host = HostPorts {
        alerts: Arc::new(TerminalAlerts),
        picker: picker.clone(),
        setup_events: Arc::new(LoggingEvents),
        verification_events: Arc::new(LoggingEvents),
    };
    let runtime = wire_dependencies(config, host).await.unwrap();
    (dir, runtime, picker)
}

#[tokio::test]
async fn login_persists_session_across_runs() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::PartialJson(json!({"email": "ada@example.com"})))
        .with_body(r#"{"token":"t1","user":{"id":"u1","roles":["personal"]}}"#)
        .create_async()
        .await;

    let (dir, runtime, picker) = runtime(server.url()).await;
    let ctx = CommandContext {
        runtime: &runtime,
        picker,
        json: true,
    };
    run_command(
        Commands::Login(LoginArgs {
            email: "ada@example.com".into(),
            password: "correct horse".into(),
        }),
        &ctx,
    )
    .await
    .unwrap();
    login.assert_async().await;
    assert_eq!(
        SessionGate::route(Screen::SignIn, &runtime.session.current()),
        Screen::ProfileSetup
    );

    // A fresh wiring over the same data dir restores the session.
    let mut config = default_config(dir.path().to_path_buf());
    config.api_base_url = server.url();
    let restored = wire_dependencies(config, rewire_hosts()).await.unwrap();
    assert!(restored.session.current().is_signed_in());
    assert_eq!(restored.session.token().await.unwrap().expose(), "t1");
}

#[tokio::test]
async fn signed_out_commands_are_refused_without_requests() {
    let mut server = Server::new_async().await;
    let profile = server
        .mock("GET", "/api/profile")
        .expect(0)
        .create_async()
        .await;

    let (_dir, runtime, picker) = runtime(server.url()).await;
    let ctx = CommandContext {
        runtime: &runtime,
        picker,
        json: false,
    };
    let err = run_command(Commands::Whoami, &ctx).await.unwrap_err();
    assert!(err.to_string().contains("not signed in"));
    profile.assert_async().await;
}

#[tokio::test]
async fn base_url_override_is_stored_and_reset() {
    let (_dir, runtime, picker) = runtime("http://localhost:5000".into()).await;
    let ctx = CommandContext {
        runtime: &runtime,
        picker,
        json: false,
    };

    run_command(
        Commands::BaseUrl {
            url: Some("https://api.atmosphere.test".into()),
            reset: false,
        },
        &ctx,
    )
    .await
    .unwrap();
    assert_eq!(
        runtime.deps.store.get(keys::API_BASE_URL).await.unwrap(),
        Some("https://api.atmosphere.test".to_string())
    );

    run_command(
        Commands::BaseUrl {
            url: None,
            reset: true,
        },
        &ctx,
    )
    .await
    .unwrap();
    assert_eq!(runtime.deps.store.get(keys::API_BASE_URL).await.unwrap(), None);
}

#[tokio::test]
async fn rejected_login_surfaces_server_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body(r#"{"message":"Invalid credentials"}"#)
        .create_async()
        .await;

    let (_dir, runtime, picker) = runtime(server.url()).await;
    let ctx = CommandContext {
        runtime: &runtime,
        picker,
        json: false,
    };
    let err = run_command(
        Commands::Login(LoginArgs {
            email: "ada@example.com".into(),
            password: "wrong password".into(),
        }),
        &ctx,
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(!runtime.session.current().is_signed_in());
}

#[tokio::test]
async fn kyc_callback_then_complete_finishes_setup_and_routes_home() {
    let mut server = Server::new_async().await;
    let (dir, runtime, picker) = runtime(server.url()).await;
    sign_in(&runtime, user_json("personal", json!({}))).await;
    let ctx = CommandContext {
        runtime: &runtime,
        picker,
        json: true,
    };

    // Identity provider redirect
    let profile = server
        .mock("GET", "/api/profile")
        .with_body(user_json("personal", json!({})).to_string())
        .create_async()
        .await;
    let kyc = server
        .mock("PUT", "/api/profile")
        .match_header("authorization", "Bearer t1")
        .match_body(Matcher::Json(json!({"kycCompleted": true})))
        .with_body(user_json("personal", json!({"kycCompleted": true})).to_string())
        .expect(1)
        .create_async()
        .await;
    run_command(
        Commands::Verify {
            command: VerifyCommands::KycCallback {
                url: "https://app.example/kyc/callback?status=approved".into(),
            },
        },
        &ctx,
    )
    .await
    .unwrap();
    kyc.assert_async().await;
    profile.remove_async().await;

    // Final step: controller load and wizard seed see the pre-completion
    // profile, the refresh after the final update sees the finished one.
    let before = server
        .mock("GET", "/api/profile")
        .with_body(user_json("personal", json!({"kycCompleted": true})).to_string())
        .expect(2)
        .create_async()
        .await;
    let finished = user_json(
        "personal",
        json!({"kycCompleted": true, "verified": true, "profileSetupComplete": true}),
    );
    let after = server
        .mock("GET", "/api/profile")
        .with_body(finished.to_string())
        .expect(1)
        .create_async()
        .await;
    let verified = server
        .mock("PUT", "/api/profile")
        .match_body(Matcher::PartialJson(
            json!({"verified": true, "profileSetupComplete": true}),
        ))
        .with_body(finished.to_string())
        .expect(1)
        .create_async()
        .await;
    run_command(
        Commands::Verify {
            command: VerifyCommands::Complete,
        },
        &ctx,
    )
    .await
    .unwrap();
    before.assert_async().await;
    verified.assert_async().await;
    after.assert_async().await;
    assert!(runtime.session.current().setup_complete());

    // The next run restores a finished account and lands on Home.
    let mut config = default_config(dir.path().to_path_buf());
    config.api_base_url = server.url();
    let restored = wire_dependencies(config, rewire_hosts()).await.unwrap();
    assert_eq!(
        SessionGate::route(Screen::SignIn, &restored.session.current()),
        Screen::Home
    );
}

#[tokio::test]
async fn verify_complete_with_pending_steps_fails_without_saving() {
    let mut server = Server::new_async().await;
    let (_dir, runtime, picker) = runtime(server.url()).await;
    sign_in(&runtime, user_json("investor", json!({"kycCompleted": true}))).await;
    server
        .mock("GET", "/api/profile")
        .with_body(user_json("investor", json!({"kycCompleted": true})).to_string())
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/profile")
        .expect(0)
        .create_async()
        .await;
    let ctx = CommandContext {
        runtime: &runtime,
        picker,
        json: false,
    };

    let err = run_command(
        Commands::Verify {
            command: VerifyCommands::Complete,
        },
        &ctx,
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "finish every verification step first");
    update.assert_async().await;
}

#[tokio::test]
async fn investor_finish_reports_failed_portfolio_save() {
    let mut server = Server::new_async().await;
    let (_dir, runtime, picker) = runtime(server.url()).await;
    let investor = user_json("investor", json!({"kycCompleted": true}));
    sign_in(&runtime, investor.clone()).await;
    let ctx = CommandContext {
        runtime: &runtime,
        picker,
        json: false,
    };

    server
        .mock("GET", "/api/profile")
        .with_body(investor.to_string())
        .create_async()
        .await;
    let existing = server
        .mock("GET", "/api/investor-details")
        .with_body(r#"{"firm":"Orbit Fund","holdings":[]}"#)
        .create_async()
        .await;
    let save_details = server
        .mock("PUT", "/api/investor-details")
        .match_body(Matcher::Regex(r#""companyName":"Acme""#.into()))
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;
    let portfolio = server
        .mock("PUT", "/api/profile")
        .match_body(Matcher::Json(json!({"portfolioComplete": true})))
        .with_status(500)
        .with_body(r#"{"error":"Profile service down"}"#)
        .expect(1)
        .create_async()
        .await;

    run_command(
        Commands::Investor {
            command: InvestorCommands::AddHolding {
                company: "Acme".into(),
                amount: 123.0,
                date: None,
                company_id: None,
                doc_url: None,
            },
        },
        &ctx,
    )
    .await
    .unwrap();
    existing.remove_async().await;
    server
        .mock("GET", "/api/investor-details")
        .with_body(
            json!({"firm": "Orbit Fund", "holdings": [{"companyName": "Acme", "amount": 123.0}]})
                .to_string(),
        )
        .create_async()
        .await;

    let err = run_command(
        Commands::Investor {
            command: InvestorCommands::Finish,
        },
        &ctx,
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "Profile service down");
    save_details.assert_async().await;
    portfolio.assert_async().await;
}

#[tokio::test]
async fn startup_submit_uploads_documents_and_completes_portfolio() {
    let mut server = Server::new_async().await;
    let (dir, runtime, picker) = runtime(server.url()).await;
    let founder = user_json("startup", json!({"kycCompleted": true}));
    sign_in(&runtime, founder.clone()).await;
    let deck = dir.path().join("deck.pdf");
    std::fs::write(&deck, b"%PDF-1.4").unwrap();
    let ctx = CommandContext {
        runtime: &runtime,
        picker,
        json: true,
    };

    server
        .mock("GET", "/api/profile")
        .with_body(founder.to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/api/startup-details")
        .with_body(r#"{"companyProfile":{"name":"Acme Rockets"}}"#)
        .create_async()
        .await;
    let upload = server
        .mock("POST", "/api/documents/upload")
        .with_body(r#"{"url":"https://cdn.test/deck.pdf"}"#)
        .expect(1)
        .create_async()
        .await;
    let save_details = server
        .mock("PUT", "/api/startup-details")
        .match_body(Matcher::Regex(r#"https://cdn.test/deck.pdf"#.into()))
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;
    let portfolio = server
        .mock("PUT", "/api/profile")
        .match_body(Matcher::Json(json!({"portfolioComplete": true})))
        .with_body(user_json("startup", json!({"kycCompleted": true, "portfolioComplete": true})).to_string())
        .expect(1)
        .create_async()
        .await;

    run_command(
        Commands::Startup {
            command: StartupCommands::Submit {
                documents: vec![(DocumentKind::PitchDeck, deck)],
                video: None,
            },
        },
        &ctx,
    )
    .await
    .unwrap();

    upload.assert_async().await;
    save_details.assert_async().await;
    portfolio.assert_async().await;
}

#[tokio::test]
async fn startup_submit_reports_failed_portfolio_save() {
    let mut server = Server::new_async().await;
    let (dir, runtime, picker) = runtime(server.url()).await;
    let founder = user_json("startup", json!({"kycCompleted": true}));
    sign_in(&runtime, founder.clone()).await;
    let deck = dir.path().join("deck.pdf");
    std::fs::write(&deck, b"%PDF-1.4").unwrap();
    let ctx = CommandContext {
        runtime: &runtime,
        picker,
        json: false,
    };

    server
        .mock("GET", "/api/profile")
        .with_body(founder.to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/api/startup-details")
        .with_body("{}")
        .create_async()
        .await;
    server
        .mock("POST", "/api/documents/upload")
        .with_body(r#"{"url":"https://cdn.test/deck.pdf"}"#)
        .create_async()
        .await;
    server
        .mock("PUT", "/api/startup-details")
        .with_body("{}")
        .create_async()
        .await;
    server
        .mock("PUT", "/api/profile")
        .with_status(503)
        .with_body(r#"{"error":"Try again later"}"#)
        .create_async()
        .await;

    let err = run_command(
        Commands::Startup {
            command: StartupCommands::Submit {
                documents: vec![(DocumentKind::PitchDeck, deck)],
                video: None,
            },
        },
        &ctx,
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "Try again later");
}
