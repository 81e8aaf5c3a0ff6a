//! 以程式建立 feed
//!
//! facet 以標題比對，group 以 `self` 連結的 href 比對；找到就原地更新，否則新增。

use crate::core::link::{find_first_by_rel, find_first_by_type};
use crate::domain::{
    BelongsTo, Collection, Contributor, Facet, Feed, Group, Link, Metadata, Publication,
    PublicationMetadata, Role,
};
use chrono::Utc;

const OPDS_FEED_TYPE: &str = "application/opds+json";

impl Feed {
    /// 建立空 feed，modified 設為現在時間
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                title: title.into(),
                modified: Some(Utc::now().fixed_offset()),
                ..Metadata::default()
            },
            ..Self::default()
        }
    }

    pub fn add_link(&mut self, href: &str, rel: &str, media_type: &str, templated: bool) {
        let mut link = Link::new(href);
        if !rel.is_empty() {
            link.add_rel(rel);
        }
        link.media_type = media_type.to_string();
        link.templated = templated;
        self.links.push(link);
    }

    pub fn add_navigation(&mut self, title: &str, href: &str, rel: &str, media_type: &str) {
        let mut link = Link::new(href);
        if !rel.is_empty() {
            link.add_rel(rel);
        }
        link.media_type = media_type.to_string();
        link.title = title.to_string();
        self.navigation.push(link);
    }

    /// 設定分頁數字，並為非空的 href 加上 next/previous/first/last 連結
    #[allow(clippy::too_many_arguments)]
    pub fn add_pagination(
        &mut self,
        number_of_items: u64,
        items_per_page: u64,
        current_page: u64,
        next: &str,
        previous: &str,
        first: &str,
        last: &str,
    ) {
        self.metadata.number_of_items = number_of_items;
        self.metadata.items_per_page = items_per_page;
        self.metadata.current_page = current_page;

        for (href, rel) in [
            (next, "next"),
            (previous, "previous"),
            (first, "first"),
            (last, "last"),
        ] {
            if !href.is_empty() {
                self.add_link(href, rel, OPDS_FEED_TYPE, false);
            }
        }
    }

    pub fn add_facet(&mut self, link: Link, group: &str) {
        if let Some(facet) = self.facets.iter_mut().find(|f| f.metadata.title == group) {
            facet.links.push(link);
            return;
        }

        self.facets.push(Facet {
            metadata: Metadata {
                title: group.to_string(),
                ..Metadata::default()
            },
            links: vec![link],
        });
    }

    pub fn add_publication_in_group(&mut self, publication: Publication, collection_link: &Link) {
        self.group_for(collection_link).publications.push(publication);
    }

    pub fn add_navigation_in_group(&mut self, link: Link, collection_link: &Link) {
        self.group_for(collection_link).navigation.push(link);
    }

    /// 取得 self 連結符合 `collection_link.href` 的 group，不存在就建立
    fn group_for(&mut self, collection_link: &Link) -> &mut Group {
        let existing = self
            .groups
            .iter()
            .position(|g| g.self_href() == Some(collection_link.href.as_str()));

        let index = match existing {
            Some(index) => index,
            None => {
                tracing::debug!("Creating group for {}", collection_link.href);
                let mut self_link = Link::new(collection_link.href.as_str());
                self_link.add_rel("self");
                self_link.title = collection_link.title.clone();
                self.groups.push(Group {
                    metadata: Metadata {
                        title: collection_link.title.clone(),
                        ..Metadata::default()
                    },
                    links: vec![self_link],
                    ..Group::default()
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }
}

impl Publication {
    pub fn new() -> Self {
        Self {
            metadata: PublicationMetadata {
                belongs_to: Some(BelongsTo::default()),
                ..PublicationMetadata::default()
            },
            ..Self::default()
        }
    }

    pub fn add_image(&mut self, href: &str) -> &mut Link {
        self.images.push(Link::new(href));
        let last = self.images.len() - 1;
        &mut self.images[last]
    }

    pub fn add_link(&mut self, href: &str, rel: &str) -> &mut Link {
        let mut link = Link::new(href);
        if !rel.is_empty() {
            link.add_rel(rel);
        }
        self.links.push(link);
        let last = self.links.len() - 1;
        &mut self.links[last]
    }

    /// 在 `role` 下新增貢獻者；空字串參數不設定
    pub fn add_contributor(
        &mut self,
        role: Role,
        name: &str,
        identifier: &str,
        sort_as: &str,
        href: &str,
        media_type: &str,
    ) {
        let mut contributor = Contributor::new(name);
        contributor.identifier = identifier.to_string();
        contributor.sort_as = sort_as.to_string();
        contributor.role = role.as_str().to_string();
        contributor.links.extend(entity_link(href, media_type));
        self.metadata.contributors_mut(role).push(contributor);
    }

    pub fn add_author(
        &mut self,
        name: &str,
        identifier: &str,
        sort_as: &str,
        href: &str,
        media_type: &str,
    ) {
        self.add_contributor(Role::Author, name, identifier, sort_as, href, media_type);
    }

    pub fn add_publisher(&mut self, name: &str, href: &str, media_type: &str) {
        self.add_contributor(Role::Publisher, name, "", "", href, media_type);
    }

    pub fn add_serie(&mut self, name: &str, position: f64, href: &str, media_type: &str) {
        let collection = membership(name, position, href, media_type);
        self.belongs_to_mut().series.push(collection);
    }

    pub fn add_collection(&mut self, name: &str, position: f64, href: &str, media_type: &str) {
        let collection = membership(name, position, href, media_type);
        self.belongs_to_mut().collection.push(collection);
    }

    fn belongs_to_mut(&mut self) -> &mut BelongsTo {
        self.metadata.belongs_to.get_or_insert_with(BelongsTo::default)
    }

    pub fn find_first_link_by_rel(&self, rel: &str) -> Option<&Link> {
        find_first_by_rel(&self.links, rel)
    }

    pub fn find_first_image_by_rel(&self, rel: &str) -> Option<&Link> {
        find_first_by_rel(&self.images, rel)
    }

    pub fn find_first_link_by_type(&self, media_type: &str) -> Option<&Link> {
        find_first_by_type(&self.links, media_type)
    }
}

fn entity_link(href: &str, media_type: &str) -> Option<Link> {
    if href.is_empty() {
        return None;
    }
    let mut link = Link::new(href);
    link.media_type = media_type.to_string();
    Some(link)
}

fn membership(name: &str, position: f64, href: &str, media_type: &str) -> Collection {
    let mut collection = Collection::new(name, position);
    collection.contributor.links.extend(entity_link(href, media_type));
    collection
}
