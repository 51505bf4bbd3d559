use crate::models::{ActivityCard, BoardSnapshot, ListArea};
use crate::render::NO_PARTICIPANTS;
use std::fmt::Write;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

pub fn render_index(snapshot: &BoardSnapshot) -> String {
    let (message_class, message_text, message_ms) = match &snapshot.message {
        Some(visible) => (
            visible.message.kind.as_str(),
            escape(&visible.message.text),
            visible.remaining_ms.to_string(),
        ),
        None => ("hidden", String::new(), "0".to_string()),
    };

    INDEX_HTML
        .replace("{{ACTIVITIES}}", &render_list(&snapshot.view.list))
        .replace(
            "{{OPTIONS}}",
            &render_options(&snapshot.view.options, &snapshot.view.form.activity),
        )
        .replace("{{EMAIL}}", &escape(&snapshot.view.form.email))
        .replace("{{MESSAGE_CLASS}}", message_class)
        .replace("{{MESSAGE_MS}}", &message_ms)
        .replace("{{MESSAGE}}", &message_text)
        .replace(
            "{{UPDATED}}",
            &escape(snapshot.view.loaded_at.as_deref().unwrap_or("never")),
        )
}

fn render_list(list: &ListArea) -> String {
    match list {
        ListArea::Loading => "<p>Loading activities...</p>".to_string(),
        ListArea::Failed(notice) => format!("<p>{}</p>", escape(notice)),
        ListArea::Loaded(cards) => cards.iter().map(render_card).collect(),
    }
}

pub fn render_card(card: &ActivityCard) -> String {
    let name = escape(&card.name);
    let mut rows = String::new();
    if card.participants.is_empty() {
        let _ = write!(rows, r#"<li class="no-participants">{NO_PARTICIPANTS}</li>"#);
    }
    for row in &card.participants {
        let email = escape(&row.email);
        let _ = write!(
            rows,
            r#"
            <li class="participant-item">
              <span class="avatar">{initials}</span>
              <span class="participant-email">{email}</span>
              <form class="unregister-form" method="post" action="/unregister">
                <input type="hidden" name="activity" value="{name}" />
                <input type="hidden" name="email" value="{email}" />
                <button class="delete-btn" type="submit" aria-label="Remove participant">&#10006;</button>
              </form>
            </li>"#,
            initials = escape(&row.initials),
        );
    }

    format!(
        r#"
        <div class="activity-card">
          <h4>{name}</h4>
          <p>{description}</p>
          <p><strong>Schedule:</strong> {schedule}</p>
          <p><strong>Availability:</strong> {spots} spots left</p>
          <div class="participants">
            <h5>Participants</h5>
            <ul class="participants-list">{rows}
            </ul>
          </div>
        </div>"#,
        description = escape(&card.description),
        schedule = escape(&card.schedule),
        spots = card.spots_left,
    )
}

fn render_options(options: &[String], selected: &str) -> String {
    let mut html = format!(r#"<option value="">{SELECT_PLACEHOLDER}</option>"#);
    for name in options {
        let marker = if name == selected { " selected" } else { "" };
        let name = escape(name);
        let _ = write!(html, r#"<option value="{name}"{marker}>{name}</option>"#);
    }
    html
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Keeps backend text from forming template placeholders.
            '{' => out.push_str("&#123;"),
            _ => out.push(c),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Activity Board</title>
  <style>
    :root {
      --bg: #f5f2ea;
      --ink: #2b2a28;
      --accent: #1a237e;
      --card: #ffffff;
      --ok-bg: #e8f5e9;
      --ok-ink: #2e7d32;
      --err-bg: #ffebee;
      --err-ink: #c62828;
      --shadow: 0 12px 30px rgba(26, 35, 126, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    header {
      text-align: center;
      margin-bottom: 24px;
    }

    h1 {
      margin: 0;
      color: var(--accent);
    }

    main {
      width: min(1000px, 100%);
      margin: 0 auto;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 24px;
    }

    section {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .activity-card {
      border: 1px solid #e4e0d6;
      border-radius: 12px;
      padding: 14px 16px;
      margin-bottom: 14px;
    }

    .activity-card h4 {
      margin: 0 0 8px;
      color: var(--accent);
    }

    .participants-list {
      list-style: none;
      padding: 0;
      margin: 0;
    }

    .participant-item {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 4px 0;
    }

    .avatar {
      width: 30px;
      height: 30px;
      border-radius: 50%;
      background: var(--accent);
      color: #fff;
      display: grid;
      place-items: center;
      font-size: 0.75rem;
      font-weight: 600;
    }

    .participant-email {
      flex: 1;
    }

    .unregister-form {
      margin: 0;
    }

    .delete-btn {
      border: none;
      background: transparent;
      color: var(--err-ink);
      cursor: pointer;
    }

    .no-participants {
      color: #7a766f;
      font-style: italic;
    }

    .form-group {
      margin-bottom: 14px;
      display: grid;
      gap: 6px;
    }

    input, select, button[type="submit"].signup {
      font: inherit;
      padding: 10px;
      border-radius: 8px;
      border: 1px solid #cfcabe;
    }

    button.signup {
      background: var(--accent);
      color: #fff;
      cursor: pointer;
    }

    #message {
      margin-top: 16px;
      padding: 12px;
      border-radius: 8px;
    }

    .success {
      background: var(--ok-bg);
      color: var(--ok-ink);
    }

    .error {
      background: var(--err-bg);
      color: var(--err-ink);
    }

    .hidden {
      display: none;
    }

    .hint {
      color: #7a766f;
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <header>
    <h1>Activity Board</h1>
    <p class="hint">Last updated: {{UPDATED}}</p>
  </header>

  <main>
    <section id="activities-container">
      <h3>Available Activities</h3>
      <div id="activities-list">{{ACTIVITIES}}
      </div>
    </section>

    <section id="signup-container">
      <h3>Sign Up for an Activity</h3>
      <form id="signup-form" method="post" action="/signup">
        <div class="form-group">
          <label for="email">Student Email:</label>
          <input type="email" id="email" name="email" value="{{EMAIL}}" required placeholder="your-email@example.com" />
        </div>
        <div class="form-group">
          <label for="activity">Select Activity:</label>
          <select id="activity" name="activity" required>{{OPTIONS}}</select>
        </div>
        <button class="signup" type="submit">Sign Up</button>
      </form>
      <div id="message" class="{{MESSAGE_CLASS}}" data-hide-in="{{MESSAGE_MS}}">{{MESSAGE}}</div>
    </section>
  </main>

  <script>
    const messageEl = document.getElementById('message');
    const hideIn = Number(messageEl.dataset.hideIn || 0);
    if (hideIn > 0) {
      setTimeout(() => messageEl.classList.add('hidden'), hideIn);
    }
  </script>
</body>
</html>
"#;
