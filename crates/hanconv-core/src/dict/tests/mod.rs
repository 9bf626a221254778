mod group;
mod text;
