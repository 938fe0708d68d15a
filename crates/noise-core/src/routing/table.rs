//! Route table - static declarative route data
//!
//! Pure data, no DOM and no HTTP. Paths are matched against the table,
//! record redirects are followed and metadata is merged along the matched
//! chain before the guard sees the target.

use tracing::warn;

/// Upper bound on chained record redirects
const MAX_REDIRECTS: usize = 8;

/// Views the dashboard can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    MainLayout,
    Dashboard,
    NoiseData,
    Alerts,
    Statistics,
    Map,
    Regions,
    Devices,
    Reports,
}

/// Deferred view reference; resolved only when the route is mounted
pub type ViewLoader = fn() -> ViewId;

/// Per-route metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// `None` inherits from the parent record, and defaults to `true`
    pub requires_auth: Option<bool>,
    pub title: Option<&'static str>,
}

impl RouteMeta {
    pub const fn public() -> Self {
        Self {
            requires_auth: Some(false),
            title: None,
        }
    }

    pub const fn protected() -> Self {
        Self {
            requires_auth: Some(true),
            title: None,
        }
    }

    pub const fn titled(title: &'static str) -> Self {
        Self {
            requires_auth: None,
            title: Some(title),
        }
    }
}

/// A single entry of the route table
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// Absolute for top-level records, relative for children
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub view: ViewLoader,
    pub redirect: Option<&'static str>,
    pub meta: RouteMeta,
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    pub fn new(path: &'static str, view: ViewLoader) -> Self {
        Self {
            path,
            name: None,
            view,
            redirect: None,
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn redirect(mut self, to: &'static str) -> Self {
        self.redirect = Some(to);
        self
    }

    pub fn children(mut self, children: Vec<RouteDescriptor>) -> Self {
        self.children = children;
        self
    }
}

/// Outcome of matching a path against the table
#[derive(Debug, Clone)]
pub struct ResolvedRoute<'a> {
    /// Normalized path after record redirects
    pub path: String,
    /// Matched records, outermost first; empty when nothing matched
    pub matched: Vec<&'a RouteDescriptor>,
    /// Merged `requires_auth`, `true` unless a matched record says otherwise
    pub requires_auth: bool,
    pub title: Option<&'static str>,
}

impl ResolvedRoute<'_> {
    /// View of the innermost matched record
    pub fn view(&self) -> Option<ViewId> {
        self.matched.last().map(|record| (record.view)())
    }

    pub fn name(&self) -> Option<&'static str> {
        self.matched.last().and_then(|record| record.name)
    }

    pub fn is_matched(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// Menu entry derived from the children of the root layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub path: String,
    pub name: Option<&'static str>,
    pub title: &'static str,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Resolve `path`, following record redirects
    pub fn resolve(&self, path: &str) -> ResolvedRoute<'_> {
        let mut target = normalize_path(path);

        for _ in 0..MAX_REDIRECTS {
            let mut matched = Vec::new();
            if !match_records(&self.routes, "", &target, &mut matched) {
                return merge(target, Vec::new());
            }

            match matched.last().and_then(|record| record.redirect) {
                Some(to) => target = normalize_path(to),
                None => return merge(target, matched),
            }
        }

        warn!("Redirect chain starting at {} is too long", path);
        merge(target, Vec::new())
    }

    /// Titled children of the root layout, in declaration order
    pub fn menu(&self) -> Vec<MenuItem> {
        self.routes
            .iter()
            .filter(|record| record.path == "/")
            .flat_map(|root| {
                root.children.iter().filter_map(move |child| {
                    child.meta.title.map(|title| MenuItem {
                        path: join_path(root.path, child.path),
                        name: child.name,
                        title,
                    })
                })
            })
            .collect()
    }

    /// Every absolute path in the table, depth first
    pub fn paths(&self) -> Vec<String> {
        fn walk(records: &[RouteDescriptor], parent: &str, out: &mut Vec<String>) {
            for record in records {
                let full = join_path(parent, record.path);
                out.push(full.clone());
                walk(&record.children, &full, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.routes, "", &mut out);
        out
    }
}

impl Default for RouteTable {
    /// The noise monitor dashboard routes
    fn default() -> Self {
        Self::new(vec![
            RouteDescriptor::new("/login", || ViewId::Login)
                .named("Login")
                .meta(RouteMeta::public()),
            RouteDescriptor::new("/", || ViewId::MainLayout)
                .redirect("/dashboard")
                .meta(RouteMeta::protected())
                .children(vec![
                    RouteDescriptor::new("dashboard", || ViewId::Dashboard)
                        .named("Dashboard")
                        .meta(RouteMeta::titled("仪表板")),
                    RouteDescriptor::new("noise-data", || ViewId::NoiseData)
                        .named("NoiseData")
                        .meta(RouteMeta::titled("噪音数据")),
                    RouteDescriptor::new("alerts", || ViewId::Alerts)
                        .named("Alerts")
                        .meta(RouteMeta::titled("告警管理")),
                    RouteDescriptor::new("statistics", || ViewId::Statistics)
                        .named("Statistics")
                        .meta(RouteMeta::titled("统计分析")),
                    RouteDescriptor::new("map", || ViewId::Map)
                        .named("Map")
                        .meta(RouteMeta::titled("地图展示")),
                    RouteDescriptor::new("regions", || ViewId::Regions)
                        .named("Regions")
                        .meta(RouteMeta::titled("监测区域")),
                    RouteDescriptor::new("devices", || ViewId::Devices)
                        .named("Devices")
                        .meta(RouteMeta::titled("监测设备")),
                    RouteDescriptor::new("reports", || ViewId::Reports)
                        .named("Reports")
                        .meta(RouteMeta::titled("报告管理")),
                ]),
        ])
    }
}

/// Strip query, fragment and trailing slash; always absolute
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        child.to_string()
    } else if parent.ends_with('/') {
        format!("{}{}", parent, child)
    } else {
        format!("{}/{}", parent, child)
    }
}

/// Depth-first match; children are tried before the record itself so the
/// deepest record wins.
fn match_records<'a>(
    records: &'a [RouteDescriptor],
    parent: &str,
    target: &str,
    matched: &mut Vec<&'a RouteDescriptor>,
) -> bool {
    for record in records {
        let full = normalize_path(&join_path(parent, record.path));
        matched.push(record);
        if match_records(&record.children, &full, target, matched) || full == target {
            return true;
        }
        matched.pop();
    }
    false
}

fn merge(path: String, matched: Vec<&RouteDescriptor>) -> ResolvedRoute<'_> {
    let requires_auth = matched
        .iter()
        .rev()
        .find_map(|record| record.meta.requires_auth)
        .unwrap_or(true);
    let title = matched.iter().rev().find_map(|record| record.meta.title);

    ResolvedRoute {
        path,
        matched,
        requires_auth,
        title,
    }
}
