use anyhow::Result;
use opds_feed::{decode, encode, encode_pretty, to_value, Feed, Link, OneOrMany, Publication};
use serde_json::json;

fn reencode(input: &serde_json::Value) -> Result<serde_json::Value> {
    let feed = decode(&serde_json::to_vec(input)?)?;
    Ok(serde_json::from_slice(&encode(&feed)?)?)
}

#[test]
fn test_canonical_document_survives_round_trip() -> Result<()> {
    let canonical = json!({
        "@context": ["http://opds-spec.org/opds.jsonld"],
        "metadata": {
            "@type": "http://schema.org/DataFeed",
            "title": "Catalog",
            "numberOfItems": 1,
            "modified": "2016-09-09T12:00:00Z"
        },
        "links": [{"href": "/self", "rel": ["self", "start"], "type": "application/opds+json"}],
        "publications": [{
            "metadata": {
                "title": {"en": "The Stranger", "fr": "L'Étranger"},
                "identifier": "urn:isbn:9780679720201",
                "author": [{"name": {"en": "Albert Camus"}, "role": "author"}],
                "language": ["en", "fr"],
                "belongs_to": {"series": [{"name": "Absurd cycle", "position": 1.0}]},
                "subject": [{"name": "Philosophy", "scheme": "BISAC"}]
            },
            "links": [{
                "href": "/stranger.epub",
                "type": "application/epub+zip",
                "rel": ["http://opds-spec.org/acquisition", "alternate"],
                "properties": {
                    "price": {"currency": "EUR", "value": 9.5},
                    "indirectAcquisition": [{"type": "application/vnd.adobe.adept+xml", "child": [{"type": "application/epub+zip"}]}]
                },
                "children": [{"href": "/stranger/part1", "rel": [], "title": "Part One"}]
            }],
            "images": [{"href": "/cover.jpg", "width": 600, "height": 900}]
        }]
    });

    let output = reencode(&canonical)?;

    assert_eq!(output["@context"], canonical["@context"]);
    assert_eq!(output["metadata"], canonical["metadata"]);
    assert_eq!(output["links"], canonical["links"]);

    let publication = &output["publications"][0];
    let expected = &canonical["publications"][0];
    assert_eq!(publication["metadata"]["title"], expected["metadata"]["title"]);
    assert_eq!(publication["metadata"]["author"], expected["metadata"]["author"]);
    assert_eq!(publication["metadata"]["language"], expected["metadata"]["language"]);
    assert_eq!(publication["metadata"]["belongs_to"], expected["metadata"]["belongs_to"]);
    assert_eq!(publication["metadata"]["subject"], expected["metadata"]["subject"]);
    assert_eq!(publication["images"], expected["images"]);

    let link = &publication["links"][0];
    assert_eq!(link["rel"], expected["links"][0]["rel"]);
    assert_eq!(link["properties"], expected["links"][0]["properties"]);
    assert_eq!(link["children"][0]["title"], json!("Part One"));
    assert_eq!(link["children"][0]["rel"], json!([]));
    Ok(())
}

#[test]
fn test_empty_lists_are_kept_and_absent_keys_stay_absent() -> Result<()> {
    let output = reencode(&json!({
        "links": [{"href": "/a", "rel": []}, {"href": "/b"}],
        "publications": [
            {"metadata": {"title": "T", "language": []}},
            {"metadata": {"title": "U"}}
        ]
    }))?;

    assert_eq!(output["links"][0]["rel"], json!([]));
    assert!(output["links"][1].get("rel").is_none());
    assert_eq!(output["publications"][0]["metadata"]["language"], json!([]));
    assert!(output["publications"][1]["metadata"].get("language").is_none());

    assert_eq!(reencode(&output)?, output);
    Ok(())
}

#[test]
fn test_single_element_lists_collapse_and_come_back() -> Result<()> {
    let input = json!({
        "links": [{"href": "/self", "rel": ["self"]}],
        "publications": [{"metadata": {"title": "T", "language": ["en"]}}]
    });

    let once = reencode(&input)?;
    assert_eq!(once["links"][0]["rel"], json!("self"));
    assert_eq!(once["publications"][0]["metadata"]["language"], json!("en"));

    let twice = reencode(&once)?;
    assert_eq!(twice, once);

    let feed = decode(&serde_json::to_vec(&once)?)?;
    assert_eq!(feed.links[0].rels(), ["self"]);
    assert_eq!(feed.publications[0].metadata.language, Some(OneOrMany::one("en")));
    Ok(())
}

#[test]
fn test_loose_shapes_are_canonicalized() -> Result<()> {
    let output = reencode(&json!({
        "metadata": {"type": "http://schema.org/DataFeed", "title": "Loose"},
        "publications": [{
            "metadata": {
                "title": "Plain",
                "narrator": "Reader",
                "belongsTo": {"collection": "Classics"},
                "subject": "Sea"
            },
            "links": [{"href": "/audio", "duration": "3600"}]
        }]
    }))?;

    assert_eq!(output["metadata"]["@type"], json!("http://schema.org/DataFeed"));
    let metadata = &output["publications"][0]["metadata"];
    assert_eq!(metadata["narrator"], json!([{"name": "Reader", "role": "narrator"}]));
    assert_eq!(metadata["belongs_to"], json!({"collection": [{"name": "Classics"}]}));
    assert_eq!(metadata["subject"], json!([{"name": "Sea"}]));
    assert_eq!(output["publications"][0]["links"][0]["duration"], json!(3600));
    Ok(())
}

#[test]
fn test_unknown_fields_are_dropped() -> Result<()> {
    let output = reencode(&json!({
        "metadata": {"title": "T", "x-vendor": 1},
        "x-extra": {"anything": true}
    }))?;
    assert!(output.get("x-extra").is_none());
    assert!(output["metadata"].get("x-vendor").is_none());
    Ok(())
}

#[test]
fn test_built_feed_encodes() -> Result<()> {
    let mut feed = Feed::new("Built");
    feed.add_link("/self", "self", "application/opds+json", false);
    let mut publication = Publication::new();
    publication.metadata.title = "Built book".into();
    publication.add_author("Ann Author", "", "", "", "");
    feed.add_publication_in_group(publication, &Link::new("/group"));

    let value = to_value(&feed)?;
    assert_eq!(value["links"][0]["rel"], json!("self"));
    assert_eq!(value["groups"][0]["links"][0]["rel"], json!("self"));
    assert_eq!(
        value["groups"][0]["publications"][0]["metadata"]["author"][0]["name"],
        json!("Ann Author")
    );
    assert!(value["groups"][0]["publications"][0]["metadata"]
        .get("belongs_to")
        .is_none());

    let pretty = String::from_utf8(encode_pretty(&feed)?)?;
    assert!(pretty.contains('\n'));
    let reparsed = decode(pretty.as_bytes())?;
    assert_eq!(reparsed.groups[0].publications.len(), 1);
    assert_eq!(reparsed.metadata.modified, feed.metadata.modified);
    Ok(())
}
