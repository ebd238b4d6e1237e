pub mod forecast_view;
