//! Fragment and page URLs

/// HTML fragments served under `components/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    Header,
    Menu,
    Footer,
    RandomPosts,
    Categories,
    Tags,
    Pagination,
}

impl Fragment {
    pub const ALL: [Fragment; 7] = [
        Fragment::Header,
        Fragment::Menu,
        Fragment::Footer,
        Fragment::RandomPosts,
        Fragment::Categories,
        Fragment::Tags,
        Fragment::Pagination,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Fragment::Header => "header",
            Fragment::Menu => "menu",
            Fragment::Footer => "footer",
            Fragment::RandomPosts => "random-posts",
            Fragment::Categories => "categories",
            Fragment::Tags => "tags",
            Fragment::Pagination => "pagination",
        }
    }
}

/// URL builder rooted at the site's base path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Routes {
    base: String,
}

impl Routes {
    pub fn new(base_path: &str) -> Self {
        Self {
            base: base_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn fragment(&self, fragment: Fragment) -> String {
        format!("{}/components/{}.html", self.base, fragment.name())
    }

    /// Page content URL; `page` is 1-indexed
    pub fn page(&self, archive: &str, page: usize) -> String {
        format!("{}/pagination/{}/page-{}.html", self.base, archive, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_urls() {
        let routes = Routes::new("");
        assert_eq!(routes.fragment(Fragment::Header), "/components/header.html");
        assert_eq!(
            routes.fragment(Fragment::RandomPosts),
            "/components/random-posts.html"
        );
    }

    #[test]
    fn base_path_prefixes_everything() {
        let routes = Routes::new("/xquiste-portfolio/");
        assert_eq!(
            routes.fragment(Fragment::Pagination),
            "/xquiste-portfolio/components/pagination.html"
        );
        assert_eq!(
            routes.page("blog", 3),
            "/xquiste-portfolio/pagination/blog/page-3.html"
        );
    }

    #[test]
    fn every_fragment_has_a_distinct_name() {
        let mut names: Vec<&str> = Fragment::ALL.iter().map(Fragment::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Fragment::ALL.len());
    }
}
