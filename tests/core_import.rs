use marks::core::import::import_html;

const EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks Menu</H1>
<DL><p>
  <DT><H3 ADD_DATE="1">Bookmarks Toolbar</H3>
  <DL><p>
    <DT><A HREF="https://toolbar.example/" ADD_DATE="1">Toolbar Link</A>
    <DT><H3>Dev</H3>
    <DL><p>
      <DT><A HREF="https://crates.io/">Crates &amp; Registry</A>
      <DT><H3>Nested</H3>
      <DL><p>
        <DT><A HREF='https://inner.example/'>Inner</A>
      </DL><p>
    </DL><p>
  </DL><p>
  <DT><A HREF="https://top.example/">Top Level</A>
  <DT><A>No href</A>
</DL><p>
"#;

#[test]
fn links_inherit_the_innermost_real_folder()
{
  let records = import_html(EXPORT);
  let by_title = |t: &str| records.iter().find(|r| r.title == t).unwrap();

  assert_eq!(by_title("Crates & Registry").folder, "Dev");
  assert_eq!(by_title("Inner").folder, "Nested");
}

#[test]
fn container_folders_are_not_folders()
{
  let records = import_html(EXPORT);
  let toolbar = records.iter().find(|r| r.title == "Toolbar Link").unwrap();
  assert_eq!(toolbar.folder, "Import");
  assert!(records.iter().all(|r| r.folder != "Bookmarks Toolbar"));
}

#[test]
fn links_outside_any_folder_land_in_import()
{
  let records = import_html(EXPORT);
  let top = records.iter().find(|r| r.title == "Top Level").unwrap();
  assert_eq!(top.folder, "Import");
}

#[test]
fn entries_without_href_or_title_are_skipped()
{
  let records = import_html(EXPORT);
  assert_eq!(records.len(), 4);
  assert!(records.iter().all(|r| !r.url.is_empty() && !r.title.is_empty()));
}

#[test]
fn entities_decode_in_titles_and_hrefs()
{
  let html = r#"<DL>
    <DT><A HREF="https://e.example/?a=1&amp;b=2">A &lt;tag&gt; &#39;q&#39;</A>
  </DL>"#;
  let records = import_html(html);
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].url, "https://e.example/?a=1&b=2");
  assert_eq!(records[0].title, "A <tag> 'q'");
}

#[test]
fn garbage_input_yields_nothing()
{
  assert!(import_html("").is_empty());
  assert!(import_html("just some text, no tags").is_empty());
  assert!(import_html("<unclosed").is_empty());
}
