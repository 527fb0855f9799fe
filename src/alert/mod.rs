//! C13 — Alert Dispatcher.
//!
//! Fires only for newly-*created* articles (never updates) matching the
//! negative-sentiment predicate. Inserts a `pib_alerts` row first (unique
//! per `article_id`), then attempts SMTP delivery; a delivery failure never
//! rolls back the alert row, it just leaves `email_sent = false` for a later
//! operator retry.

use chrono::Utc;
use lettre::message::{header::ContentType, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::config::Config;
use crate::error::AlertError;
use crate::model::{PibAlert, StoredArticle};

const MAX_SUBJECT_TITLE_LEN: usize = 120;

/// Whether a freshly-created article should trigger a PIB alert.
pub fn should_alert(article: &StoredArticle, config: &Config) -> bool {
    config.alert_enabled
        && article.sentiment_label == crate::model::SentimentLabel::Negative
        && article.sentiment_score >= config.alert_negative_threshold
        && !article.goi_schemes.is_empty()
}

/// Inserts a PIB alert row for `article` if one doesn't already exist, then
/// attempts email delivery. Returns `Ok(None)` if an alert row already
/// existed (duplicate skipped, matching the "never re-fire" invariant) or
/// the predicate didn't match a row the caller double-checked.
pub async fn dispatch(pool: &PgPool, config: &Config, article: &StoredArticle) -> Result<Option<PibAlert>, AlertError> {
    let existing = sqlx::query("SELECT id FROM pib_alerts WHERE article_id = $1")
        .bind(article.id)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Ok(None);
    }

    let mut alert = PibAlert {
        id: Uuid::new_v4(),
        article_id: article.id,
        title: article.title.clone(),
        summary: article.summary.clone(),
        link: article.url.clone(),
        language: article.detected_language.clone(),
        sentiment_score: article.sentiment_score,
        is_reviewed: false,
        reviewed_at: None,
        reviewed_by: None,
        email_sent: false,
        email_sent_at: None,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO pib_alerts (
            id, article_id, title, summary, link, language, sentiment_score,
            is_reviewed, email_sent, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, FALSE, $8, $8)
        "#,
    )
    .bind(alert.id)
    .bind(alert.article_id)
    .bind(&alert.title)
    .bind(&alert.summary)
    .bind(&alert.link)
    .bind(&alert.language)
    .bind(alert.sentiment_score)
    .bind(alert.created_at)
    .execute(pool)
    .await?;

    if config.smtp_enabled {
        match send_alert_email(config, article).await {
            Ok(()) => {
                let sent_at = Utc::now();
                sqlx::query("UPDATE pib_alerts SET email_sent = TRUE, email_sent_at = $2 WHERE id = $1")
                    .bind(alert.id)
                    .bind(sent_at)
                    .execute(pool)
                    .await?;
                alert.email_sent = true;
                alert.email_sent_at = Some(sent_at);
            }
            Err(e) => {
                tracing::warn!(article_id = %article.id, error = %e, "alert email delivery failed");
            }
        }
    }

    Ok(Some(alert))
}

fn subject_line(title: &str) -> String {
    let truncated: String = title.chars().take(MAX_SUBJECT_TITLE_LEN).collect();
    format!("PIB Alert: Negative sentiment detected — {truncated}")
}

fn plain_text_body(article: &StoredArticle, config: &Config) -> String {
    format!(
        "A negative-sentiment, government-relevant article was detected.\n\n\
         Title: {title}\n\
         Sentiment score: {score:.2}\n\
         Schemes: {schemes}\n\
         Link: {url}\n\n\
         Review it at {frontend}/pib-alerts\n",
        title = article.title,
        score = article.sentiment_score,
        schemes = article.goi_schemes.join(", "),
        url = article.url,
        frontend = config.frontend_url,
    )
}

fn html_body(article: &StoredArticle, config: &Config) -> String {
    format!(
        r#"<html><body style="font-family: sans-serif; margin: 0; padding: 0;">
  <div style="background-color: #1e3a8a; color: #ffffff; padding: 16px 24px;">
    <h2 style="margin: 0;">PIB Alert</h2>
  </div>
  <div style="padding: 24px;">
    <p style="color: #dc2626; font-weight: bold;">Negative sentiment detected</p>
    <p><strong>{title}</strong></p>
    <p>Sentiment score: {score:.2}</p>
    <p>Schemes: {schemes}</p>
    <p><a href="{url}">Original article</a></p>
    <p>
      <a href="{frontend}/pib-alerts"
         style="display: inline-block; background-color: #1e3a8a; color: #ffffff; padding: 10px 20px; text-decoration: none; border-radius: 4px;">
        Review in PIB Alerts
      </a>
    </p>
  </div>
</body></html>"#,
        title = html_escape::encode_text(&article.title),
        score = article.sentiment_score,
        schemes = html_escape::encode_text(&article.goi_schemes.join(", ")),
        url = article.url,
        frontend = config.frontend_url,
    )
}

async fn send_alert_email(config: &Config, article: &StoredArticle) -> Result<(), AlertError> {
    let from = config.smtp_from_email.parse().map_err(|e| AlertError::InvalidAddress {
        address: config.smtp_from_email.clone(),
        reason: format!("{e}"),
    })?;
    let to = config.pib_alert_email.parse().map_err(|e| AlertError::InvalidAddress {
        address: config.pib_alert_email.clone(),
        reason: format!("{e}"),
    })?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(subject_line(&article.title))
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(plain_text_body(article, config)),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_body(article, config)),
                ),
        )?;

    let mut transport_builder = if config.smtp_use_tls {
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)?
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_server)
    }
    .port(config.smtp_port)
    .timeout(Some(config.smtp_timeout));

    if !config.smtp_username.is_empty() {
        transport_builder =
            transport_builder.credentials(Credentials::new(config.smtp_username.clone(), config.smtp_password.clone()));
    }

    let transport = transport_builder.build();
    transport.send(message).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfidenceLevel, ContentCategory, SentimentLabel, SourceKind};

    fn make_test_article(sentiment_score: f64, has_schemes: bool) -> StoredArticle {
        StoredArticle {
            id: Uuid::new_v4(),
            url: "https://example.com/a".to_string(),
            title: "Scheme rollout faces delays across several states".to_string(),
            summary: "Summary".to_string(),
            content: "Content".to_string(),
            source: "pib.gov.in".to_string(),
            source_type: SourceKind::Rss,
            region: None,
            language: "en".to_string(),
            detected_language: "en".to_string(),
            detected_script: "latin".to_string(),
            language_confidence: 0.9,
            translated_title: None,
            translated_summary: None,
            published_at: Utc::now(),
            collected_at: Utc::now(),
            sentiment_label: SentimentLabel::Negative,
            sentiment_score,
            sentiment_polarity: -sentiment_score,
            topic_labels: vec![],
            entities: vec![],
            hash: "abc".to_string(),
            is_goi: true,
            relevance_score: 0.8,
            goi_ministries: vec![],
            goi_schemes: if has_schemes { vec!["MGNREGA".to_string()] } else { vec![] },
            goi_entities: vec![],
            goi_matched_terms: vec![],
            content_category: ContentCategory::Government,
            content_sub_category: "Scheme Implementation".to_string(),
            classification_confidence: 0.8,
            classification_keywords: vec![],
            should_show_pib: true,
            filter_reason: None,
        }
    }

    fn test_config() -> Config {
        let _ = ConfidenceLevel::High;
        unsafe {
            std::env::set_var("DATABASE_URL", "postgres://localhost/test");
        }
        let cfg = Config::load().unwrap();
        unsafe {
            std::env::remove_var("DATABASE_URL");
        }
        cfg
    }

    #[test]
    fn alert_predicate_requires_schemes() {
        let config = test_config();
        let article = make_test_article(0.8, false);
        assert!(!should_alert(&article, &config));
    }

    #[test]
    fn alert_predicate_requires_threshold() {
        let config = test_config();
        let article = make_test_article(0.3, true);
        assert!(!should_alert(&article, &config));
    }

    #[test]
    fn alert_predicate_matches_full_criteria() {
        let config = test_config();
        let article = make_test_article(0.8, true);
        assert!(should_alert(&article, &config));
    }

    #[test]
    fn subject_line_truncates_long_titles() {
        let long_title = "a".repeat(300);
        let subject = subject_line(&long_title);
        assert!(subject.len() < 300);
    }
}
