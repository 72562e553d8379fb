mod pipeline_props;
