//! Maintenance CLI for the site database.
//!
//! Two one-off operations that talk to Postgres directly: seeding the
//! admin account, and the one-time migration of legacy image URLs stored
//! inside project records.

use clap::{Parser, Subcommand};
use sha2::{Digest, Sha256};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("username must not be blank")]
    BlankUsername,
    #[error("password must be at least 8 characters")]
    WeakPassword,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Parser, Debug)]
#[command(name = "site-admin", about = "Maintenance commands for the site database")]
struct Cli {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create or update the admin account.
    SeedAdmin {
        #[arg(long, default_value = "admin")]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Rewrite legacy image URLs inside project records against the
    /// configured public base URL.
    MigrateImageUrls {
        #[arg(long, env = "PUBLIC_BASE_URL", default_value = "http://localhost:5000")]
        base_url: String,
        /// Report what would change without writing.
        #[arg(long)]
        dry_run: bool,
    },
}

fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    bytes.iter().map(|b| format!("{b:02x}")).collect::<String>()
}

async fn seed_admin(pool: &PgPool, username: &str, password: &str) -> Result<Uuid, CliError> {
    let normalized = username.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return Err(CliError::BlankUsername);
    }
    if password.len() < 8 {
        return Err(CliError::WeakPassword);
    }

    let row = sqlx::query(
        r"INSERT INTO accounts (username, password_hash, role)
          VALUES ($1, $2, 'admin')
          ON CONFLICT (username) DO UPDATE SET password_hash = EXCLUDED.password_hash
          RETURNING id",
    )
    .bind(&normalized)
    .bind(hash_password(password))
    .fetch_one(pool)
    .await?;

    Ok(row.get("id"))
}

const LEGACY_ORIGINS: [&str; 3] = ["http://localhost:5000", "https://localhost:5000", "localhost:5000"];

/// Rewrite one stored image URL. Mirrors the client-side normalizer so a
/// migrated database serves URLs no client needs to touch again.
fn rewrite_url(url: &str, base_url: &str) -> String {
    if url.is_empty() {
        return url.to_owned();
    }

    let base_url = base_url.trim_end_matches('/');

    for legacy in LEGACY_ORIGINS {
        if let Some(idx) = url.find(legacy) {
            let mut rewritten = String::with_capacity(url.len() + base_url.len());
            rewritten.push_str(&url[..idx]);
            rewritten.push_str(base_url);
            rewritten.push_str(&url[idx + legacy.len()..]);
            return rewritten;
        }
    }

    let path = url.strip_prefix('/').unwrap_or(url);
    if path == "uploads" || path.starts_with("uploads/") {
        if url.starts_with('/') {
            return format!("{base_url}{url}");
        }
        return format!("{base_url}/{url}");
    }

    url.to_owned()
}

/// Rewrite every `url` field in a project's images array. Returns `None`
/// when nothing changed.
fn rewrite_images(images: &serde_json::Value, base_url: &str) -> Option<serde_json::Value> {
    let list = images.as_array()?;
    let mut changed = false;

    let rewritten: Vec<serde_json::Value> = list
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            if let Some(url) = entry.get("url").and_then(|u| u.as_str()) {
                let new_url = rewrite_url(url, base_url);
                if new_url != url {
                    changed = true;
                    entry["url"] = serde_json::Value::String(new_url);
                }
            }
            entry
        })
        .collect();

    changed.then(|| serde_json::Value::Array(rewritten))
}

async fn migrate_image_urls(pool: &PgPool, base_url: &str, dry_run: bool) -> Result<(u64, u64), CliError> {
    let rows = sqlx::query("SELECT id, images FROM projects")
        .fetch_all(pool)
        .await?;

    let total = rows.len() as u64;
    let mut updated = 0u64;

    for row in rows {
        let id: Uuid = row.get("id");
        let images: serde_json::Value = row.get("images");

        let Some(rewritten) = rewrite_images(&images, base_url) else {
            continue;
        };

        updated += 1;
        if dry_run {
            println!("would update project {id}");
            continue;
        }

        sqlx::query("UPDATE projects SET images = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(&rewritten)
            .execute(pool)
            .await?;
        println!("updated project {id}");
    }

    Ok((total, updated))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&cli.database_url)
        .await?;

    match cli.command {
        Command::SeedAdmin { username, password } => {
            let id = seed_admin(&pool, &username, &password).await?;
            println!("admin account ready: {id}");
        }
        Command::MigrateImageUrls { base_url, dry_run } => {
            let (total, updated) = migrate_image_urls(&pool, &base_url, dry_run).await?;
            let verb = if dry_run { "would update" } else { "updated" };
            println!("{verb} {updated} of {total} projects");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.granitepeak.example";

    #[test]
    fn hash_password_is_sha256_hex() {
        let hash = hash_password("s3cret-pass");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_password("s3cret-pass"));
    }

    #[test]
    fn rewrite_url_replaces_legacy_origins() {
        assert_eq!(
            rewrite_url("http://localhost:5000/uploads/a.jpg", BASE),
            "https://api.granitepeak.example/uploads/a.jpg"
        );
        assert_eq!(
            rewrite_url("localhost:5000/uploads/a.jpg", BASE),
            "https://api.granitepeak.example/uploads/a.jpg"
        );
    }

    #[test]
    fn rewrite_url_prefixes_uploads_paths() {
        assert_eq!(rewrite_url("/uploads/a.jpg", BASE), "https://api.granitepeak.example/uploads/a.jpg");
        assert_eq!(rewrite_url("uploads/a.jpg", BASE), "https://api.granitepeak.example/uploads/a.jpg");
    }

    #[test]
    fn rewrite_url_leaves_foreign_urls_alone() {
        let url = "https://res.cloudinary.com/demo/site.jpg";
        assert_eq!(rewrite_url(url, BASE), url);
        assert_eq!(rewrite_url("", BASE), "");
    }

    #[test]
    fn rewrite_url_is_idempotent() {
        for sample in ["http://localhost:5000/uploads/a.jpg", "/uploads/a.jpg", "uploads/a.jpg"] {
            let once = rewrite_url(sample, BASE);
            assert_eq!(rewrite_url(&once, BASE), once);
        }
    }

    #[test]
    fn rewrite_images_reports_unchanged_lists() {
        let images = serde_json::json!([{"url": "https://res.cloudinary.com/x.jpg", "caption": null}]);
        assert!(rewrite_images(&images, BASE).is_none());
    }

    #[test]
    fn rewrite_images_rewrites_only_url_fields() {
        let images = serde_json::json!([
            {"url": "/uploads/a.jpg", "caption": "deck"},
            {"url": "https://res.cloudinary.com/x.jpg", "caption": null}
        ]);
        let rewritten = rewrite_images(&images, BASE).expect("changed");
        assert_eq!(rewritten[0]["url"], "https://api.granitepeak.example/uploads/a.jpg");
        assert_eq!(rewritten[0]["caption"], "deck");
        assert_eq!(rewritten[1]["url"], "https://res.cloudinary.com/x.jpg");
    }

    #[test]
    fn rewrite_images_tolerates_malformed_entries() {
        let images = serde_json::json!([{"caption": "no url"}, 42]);
        assert!(rewrite_images(&images, BASE).is_none());
        assert!(rewrite_images(&serde_json::json!("not-a-list"), BASE).is_none());
    }
}
