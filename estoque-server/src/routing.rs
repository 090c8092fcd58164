//! 页面路由
//!
//! 路由集合是封闭的：每个页面对应一个 [`Route`] 变体，渲染时穷尽匹配。
//! 既接受路径 (`/produtos`) 也接受 hash 片段 (`#/produtos`)。

/// Every page of the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Products,
    Add,
    Query,
    Sell,
    Restock,
    Report,
    /// Unknown location (kept for the 404 page)
    NotFound(String),
}

impl Route {
    /// Navigation entries, in menu order
    pub const NAV: [Route; 7] = [
        Route::Dashboard,
        Route::Products,
        Route::Add,
        Route::Query,
        Route::Sell,
        Route::Restock,
        Route::Report,
    ];

    /// Parse a path or hash fragment; empty means the dashboard
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let path = location.strip_prefix('#').unwrap_or(location);
        // query string is not part of the route
        let path = path.split(['?', '#']).next().unwrap_or_default();

        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Dashboard,
            "/produtos" => Self::Products,
            "/adicionar" => Self::Add,
            "/consultar" => Self::Query,
            "/vender" => Self::Sell,
            "/repor" => Self::Restock,
            "/relatorio" => Self::Report,
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Canonical path
    pub fn path(&self) -> &str {
        match self {
            Self::Dashboard => "/",
            Self::Products => "/produtos",
            Self::Add => "/adicionar",
            Self::Query => "/consultar",
            Self::Sell => "/vender",
            Self::Restock => "/repor",
            Self::Report => "/relatorio",
            Self::NotFound(path) => path,
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Produtos",
            Self::Add => "Adicionar",
            Self::Query => "Consultar",
            Self::Sell => "Vender",
            Self::Restock => "Repor",
            Self::Report => "Relatório",
            Self::NotFound(_) => "404",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
