mod app;
mod form;
mod notify;
mod visitor;
