mod cancellation;
mod navigation;
mod provider_scope;
