mod chain;
mod properties;
