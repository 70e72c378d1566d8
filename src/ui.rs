use crate::clock::{DATE_TARGET, TIME_TARGET};
use crate::forms::StudentForm;
use crate::page::{SUB_TAB_KEYS, TAB_KEYS};
use crate::registry::UiRegistry;
use crate::tabs::activator_key;

pub fn render_index<R: UiRegistry + ?Sized>(page: &R) -> String {
    let class_of = |key: &str| {
        page.by_key(key)
            .map(|element| element.class_attr())
            .unwrap_or_default()
    };
    let text_of = |key: &str| {
        page.by_key(key)
            .map(|element| escape(&element.text))
            .unwrap_or_default()
    };
    let value_of = |form: StudentForm| {
        page.by_key(form.input_key())
            .map(|element| escape(&element.value))
            .unwrap_or_default()
    };

    let tab_nav = nav_buttons(&TAB_KEYS, "/tabs", &class_of);
    let sub_tab_nav = nav_buttons(&SUB_TAB_KEYS, "/sub-tabs", &class_of);

    INDEX_HTML
        .replace("{{TAB_NAV}}", &tab_nav)
        .replace("{{SUB_TAB_NAV}}", &sub_tab_nav)
        .replace("{{STUDENTS_CLASS}}", &class_of("students"))
        .replace("{{LIBRARY_CLASS}}", &class_of("library"))
        .replace("{{DASHBOARD_CLASS}}", &class_of("dashboard"))
        .replace("{{GRADUATION_CLASS}}", &class_of("graduation"))
        .replace("{{TIME}}", &text_of(TIME_TARGET))
        .replace("{{DATE}}", &text_of(DATE_TARGET))
        .replace("{{DASHBOARD_ID}}", &value_of(StudentForm::Dashboard))
        .replace("{{GRADUATION_ID}}", &value_of(StudentForm::Graduation))
}

fn nav_buttons(keys: &[&str], prefix: &str, class_of: &dyn Fn(&str) -> String) -> String {
    keys.iter()
        .map(|key| {
            let button = activator_key(key);
            format!(
                r#"<form method="post" action="{prefix}/{key}"><button id="{button}" class="{}" type="submit">{}</button></form>"#,
                class_of(&button),
                label(key)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn label(key: &str) -> &'static str {
    match key {
        "students" => "Étudiants",
        "library" => "Bibliothèque",
        "dashboard" => "Tableau de bord",
        "graduation" => "Diplôme",
        _ => "",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Portail étudiant</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #23262b;
      --accent: #2f4858;
      --card: #ffffff;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 24px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
    }

    .clock {
      font-variant-numeric: tabular-nums;
    }

    nav {
      display: flex;
      gap: 8px;
      margin: 16px 0;
    }

    nav form {
      margin: 0;
    }

    .tab-button, .sub-tab-button {
      border: 1px solid var(--accent);
      background: transparent;
      border-radius: 999px;
      padding: 6px 14px;
      cursor: pointer;
    }

    .tab-button.active, .sub-tab-button.active {
      background: var(--accent);
      color: #fff;
    }

    .tab-content, .sub-tab-content {
      display: none;
    }

    .tab-content.active, .sub-tab-content.active {
      display: block;
      background: var(--card);
      border-radius: 12px;
      padding: 16px;
    }

    pre {
      white-space: pre-wrap;
    }
  </style>
</head>
<body>
  <header>
    <h1>Portail étudiant</h1>
    <div>
      <div id="current-time" class="clock">{{TIME}}</div>
      <div id="current-date" class="clock">{{DATE}}</div>
    </div>
  </header>

  <nav>
        {{TAB_NAV}}
  </nav>

  <section id="students" class="{{STUDENTS_CLASS}}">
    <nav>
        {{SUB_TAB_NAV}}
    </nav>

    <div id="dashboard" class="{{DASHBOARD_CLASS}}">
      <form class="student-form" data-endpoint="/api/dashboard" data-input="dashboard-student-id">
        <input id="dashboard-student-id" placeholder="ID étudiant" value="{{DASHBOARD_ID}}" />
        <button type="submit">Afficher</button>
      </form>
      <pre class="result"></pre>
    </div>

    <div id="graduation" class="{{GRADUATION_CLASS}}">
      <form class="student-form" data-endpoint="/api/graduation" data-input="graduation-student-id">
        <input id="graduation-student-id" placeholder="ID étudiant" value="{{GRADUATION_ID}}" />
        <button type="submit">Vérifier</button>
      </form>
      <pre class="result"></pre>
    </div>
  </section>

  <section id="library" class="{{LIBRARY_CLASS}}">
    <form id="library-form">
      <input id="library-student-id" placeholder="ID étudiant" />
      <button type="submit">Mes emprunts et notes</button>
    </form>
    <h3>Emprunts en cours</h3>
    <pre id="library-loans"></pre>
    <h3>Notes</h3>
    <pre id="library-grades"></pre>
  </section>

  <script>
    const timeEl = document.getElementById('current-time');
    const dateEl = document.getElementById('current-date');

    const refreshClock = async () => {
      const res = await fetch('/api/clock');
      if (!res.ok) {
        return;
      }
      const clock = await res.json();
      timeEl.textContent = clock.time;
      dateEl.textContent = clock.date;
    };

    setInterval(() => refreshClock().catch((err) => console.error(err)), 1000);

    const showJson = async (url, target) => {
      const res = await fetch(url);
      const out = document.getElementById(target);
      out.textContent = res.ok ? JSON.stringify(await res.json(), null, 2) : await res.text();
    };

    document.getElementById('library-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const studentId = document.getElementById('library-student-id').value;
      if (!studentId) {
        alert('Veuillez entrer un ID étudiant');
        return;
      }
      const base = `/api/students/${encodeURIComponent(studentId)}`;
      await Promise.all([
        showJson(`${base}/loans`, 'library-loans'),
        showJson(`${base}/grades`, 'library-grades')
      ]);
    });

    document.querySelectorAll('.student-form').forEach((form) => {
      form.addEventListener('submit', async (event) => {
        event.preventDefault();
        const input = document.getElementById(form.dataset.input);
        const res = await fetch(form.dataset.endpoint, {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ student_id: input.value })
        });
        if (res.status === 400) {
          alert(await res.text());
          return;
        }
        const out = form.parentElement.querySelector('.result');
        out.textContent = JSON.stringify(await res.json(), null, 2);
      });
    });
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fill;
    use crate::page::standard_page;
    use crate::registry::UiRegistry;

    #[test]
    fn renders_active_classes_and_clock() {
        let mut page = standard_page();
        page.by_key_mut(TIME_TARGET).unwrap().text = "09:05:03".into();
        let html = render_index(&page);

        assert!(html.contains(r#"<section id="students" class="active tab-content">"#));
        assert!(html.contains(r#"<section id="library" class="tab-content">"#));
        assert!(html.contains(r#"id="students-button" class="active tab-button""#));
        assert!(html.contains(r#"<div id="current-time" class="clock">09:05:03</div>"#));
        assert!(html.contains(r#"<input id="library-student-id""#));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn escapes_input_values() {
        let mut page = standard_page();
        fill(&mut page, StudentForm::Dashboard, r#""><script>"#);
        let html = render_index(&page);
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
