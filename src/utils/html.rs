// src/utils/html.rs

/// Builds the submission-instructions block appended to every served quiz.
///
/// * `submit_url`: where the agent should POST its answer.
/// * `quiz_url`: the URL the agent used to fetch the quiz, echoed in the sample payload.
pub fn submission_footer(submit_url: &str, quiz_url: &str) -> String {
    format!(
        r#"
    <hr>
    <div style="background: #f0f0f0; padding: 15px; border-top: 2px solid #333;">
        <h4>Submission Instructions</h4>
        <p>Post your answer to: <code>{submit_url}</code></p>
        <pre style="background:#ddd; padding:10px;">
{{
  "email": "student@example.com",
  "secret": "TEST_SECRET",
  "url": "{quiz_url}",
  "answer": "YOUR_ANSWER_HERE"
}}
        </pre>
    </div>
    "#
    )
}

/// Stored quiz followed by the instructions footer.
pub fn render_quiz(quiz_html: &str, base_url: &str, full_url: &str) -> String {
    let submit_url = format!("{base_url}submit");
    let mut page = String::with_capacity(quiz_html.len() + 512);
    page.push_str(quiz_html);
    page.push_str(&submission_footer(&submit_url, full_url));
    page
}

/// Minimal escaping for text placed inside HTML elements or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_is_followed_by_footer() {
        let page = render_quiz(
            "<p>Q1</p>",
            "http://localhost:9000/",
            "http://localhost:9000/quiz",
        );

        assert!(page.starts_with("<p>Q1</p>\n    <hr>"));
        assert_eq!(page.matches("Submission Instructions").count(), 1);
        assert!(page.contains("<code>http://localhost:9000/submit</code>"));
        assert!(page.contains(r#""url": "http://localhost:9000/quiz","#));
        assert!(page.trim_end().ends_with("</div>"));
    }

    #[test]
    fn escape_handles_markup() {
        assert_eq!(
            escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;&lt;/a&gt;"
        );
    }
}
