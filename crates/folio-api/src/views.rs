// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Compiled page templates.

Every page extends `base.html`, which carries the shared navbar, theme toggle,
loading screen, cursor elements and the client script tag.
*/

use askama::Template;
use folio_catalog::{Project, SiteProfile};

use crate::common::SiteSettings;

/// Navigation entry highlighted in the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Portfolio,
    Contact,
    None,
}

impl NavSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::Portfolio => "portfolio",
            NavSection::Contact => "contact",
            NavSection::None => "",
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub site: &'a SiteSettings,
    pub profile: &'a SiteProfile,
    pub projects: &'a [Project],
    pub active: &'static str,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioPage<'a> {
    pub site: &'a SiteSettings,
    pub profile: &'a SiteProfile,
    pub projects: &'a [Project],
    pub categories: Vec<&'a str>,
    pub active: &'static str,
}

#[derive(Template)]
#[template(path = "project.html")]
pub struct ProjectPage<'a> {
    pub site: &'a SiteSettings,
    pub profile: &'a SiteProfile,
    pub project: &'a Project,
    pub active: &'static str,
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPage<'a> {
    pub site: &'a SiteSettings,
    pub profile: &'a SiteProfile,
    pub active: &'static str,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundPage<'a> {
    pub site: &'a SiteSettings,
    pub profile: &'a SiteProfile,
    pub active: &'static str,
}
