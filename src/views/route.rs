#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    /// The id is passed to `Registry::lookup` as-is; an unknown id is the
    /// category page's problem, not the router's.
    Category(String),
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches '{0}'")]
    NoMatch(String),

    #[error("category route is missing its id")]
    MissingCategoryId,
}

impl Route {
    /// Accepts `/`, `/category/{id}`, and the same with a leading `#` (hash routing).
    pub fn parse(path: &str) -> Result<Route, RouteError> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let trimmed = trimmed.split(['?', '#']).next().unwrap_or_default();

        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Ok(Route::Landing),
            ["category"] => Err(RouteError::MissingCategoryId),
            ["category", id] => Ok(Route::Category((*id).to_string())),
            _ => Err(RouteError::NoMatch(path.to_string())),
        }
    }

    /// Unmatched paths land on the landing page.
    pub fn parse_or_landing(path: &str) -> Route {
        Route::parse(path).unwrap_or_else(|e| {
            tracing::debug!(path, error = %e, "route fallback to landing");
            Route::Landing
        })
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Category(id) => format!("/category/{id}"),
        }
    }

    /// Hash-routed link target.
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_routes() {
        assert_eq!(Route::parse("/"), Ok(Route::Landing));
        assert_eq!(Route::parse(""), Ok(Route::Landing));
        assert_eq!(Route::parse("#/"), Ok(Route::Landing));
        assert_eq!(
            Route::parse("/category/multimedia"),
            Ok(Route::Category("multimedia".into()))
        );
        assert_eq!(
            Route::parse("#/category/storage/"),
            Ok(Route::Category("storage".into()))
        );
        assert_eq!(
            Route::parse("/category/device?tab=1"),
            Ok(Route::Category("device".into()))
        );
    }

    #[test]
    fn rejects_other_paths() {
        assert_eq!(Route::parse("/category"), Err(RouteError::MissingCategoryId));
        assert!(matches!(Route::parse("/about"), Err(RouteError::NoMatch(_))));
        assert!(matches!(
            Route::parse("/category/a/b"),
            Err(RouteError::NoMatch(_))
        ));
        assert_eq!(Route::parse_or_landing("/about"), Route::Landing);
    }

    #[test]
    fn unknown_category_ids_still_route() {
        assert_eq!(
            Route::parse("/category/not-a-real-id"),
            Ok(Route::Category("not-a-real-id".into()))
        );
    }

    #[test]
    fn href_parses_back() {
        for route in [Route::Landing, Route::Category("network".into())] {
            assert_eq!(Route::parse(&route.href()), Ok(route.clone()));
            assert_eq!(Route::parse(&route.path()), Ok(route));
        }
    }
}
