//! Capabilities the client consumes but does not implement.
//!
//! Futures are `!Send`: everything runs on the browser's single thread.

use futures::future::LocalBoxFuture;
use std::rc::Rc;

use crate::domain::errors::ApiError;
use crate::domain::funds::MutualFund;
use crate::domain::notifications::ToastKind;
use crate::domain::registration::RegistrationRequest;
use crate::domain::routes::Route;

pub trait FundSearchPort {
    fn search_funds<'a>(&'a self, query: &'a str) -> LocalBoxFuture<'a, Result<Vec<MutualFund>, ApiError>>;
}

pub trait AccountPort {
    fn register<'a>(&'a self, request: &'a RegistrationRequest) -> LocalBoxFuture<'a, Result<(), ApiError>>;
}

pub trait NotificationSink {
    fn show_toast(&self, kind: ToastKind, message: &str);
}

pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl<T: FundSearchPort + ?Sized> FundSearchPort for Rc<T> {
    fn search_funds<'a>(&'a self, query: &'a str) -> LocalBoxFuture<'a, Result<Vec<MutualFund>, ApiError>> {
        (**self).search_funds(query)
    }
}

impl<T: AccountPort + ?Sized> AccountPort for Rc<T> {
    fn register<'a>(&'a self, request: &'a RegistrationRequest) -> LocalBoxFuture<'a, Result<(), ApiError>> {
        (**self).register(request)
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for Rc<T> {
    fn show_toast(&self, kind: ToastKind, message: &str) {
        (**self).show_toast(kind, message)
    }
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }
}
