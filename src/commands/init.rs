//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const CONFIG_TEMPLATE: &str = r#"# Site
title: My Portfolio
description: Projects, writing and a reading list
author: John Doe
bio: Full stack engineer with a passion for creative engineering solutions.
language: en

# URL
url: http://example.com
root: /

# Directory
content_dir: content
public_dir: public
static_dir: static
sections:
  blog: blog
  projects: projects

# Writing
date_format: MMMM D, YYYY
highlight:
  enable: true
  theme: base16-ocean.dark
  line_number: false

# Feed
feed_limit: 20

# Navigation
menu:
  Home: /
  Blog: /blog/
  Projects: /projects/
  Books: /books/

# Books page
books:
  reading:
    - title: Truman
      author: McCullough
  next_up:
    - title: In Cold Blood
      author: Capote
  finished:
    - title: Lonesome Dove
      author: McMurtry
"#;

const STYLE_TEMPLATE: &str = r#"body {
  max-width: 40rem;
  margin: 2rem auto;
  padding: 0 1rem;
  font-family: system-ui, sans-serif;
  line-height: 1.6;
}
nav ul { display: flex; gap: 1rem; list-style: none; padding: 0; }
.entry { display: block; margin-bottom: 1rem; color: inherit; text-decoration: none; }
.entry-title { font-weight: 600; margin: 0; }
.entry-summary, .entry-date { margin: 0; color: #555; }
.book-title { font-style: italic; }
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{:?} already exists", config_path);
    }

    fs::create_dir_all(target_dir.join("content/blog"))?;
    fs::create_dir_all(target_dir.join("content/projects"))?;
    fs::create_dir_all(target_dir.join("static/css"))?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    fs::write(target_dir.join("static/css/style.css"), STYLE_TEMPLATE)?;

    let today = chrono::Local::now().format("%Y-%m-%d");
    let sample_post = format!(
        r#"---
title: Hello World
publishedAt: '{}'
summary: The first post on this site.
---

Welcome! Posts live in `content/blog`, projects in `content/projects`.

```bash
$ folio-rs new "My Next Post"
$ folio-rs generate
```
"#,
        today
    );
    fs::write(target_dir.join("content/blog/hello-world.md"), sample_post)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate;
    use crate::Folio;

    #[test]
    fn test_init_then_generate() {
        let tmp = tempfile::tempdir().unwrap();
        init_site(tmp.path()).unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.config.books.reading[0].title, "Truman");

        generate::run(&folio).unwrap();
        let home = fs::read_to_string(folio.public_dir.join("index.html")).unwrap();
        assert!(home.contains(r#"href="/blog/hello-world""#));
        assert!(folio.public_dir.join("books/index.html").exists());
        assert!(folio.public_dir.join("css/style.css").exists());
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let tmp = tempfile::tempdir().unwrap();
        init_site(tmp.path()).unwrap();
        assert!(init_site(tmp.path()).is_err());
    }
}
